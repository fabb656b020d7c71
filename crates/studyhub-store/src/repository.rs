//! Repository layer providing domain-typed access to the document store.
//!
//! This module wraps the raw Store operations with studyhub-core types.
//! Handlers work in terms of `Stored<R::Fields>`; the repository handles
//! the JSONB encode/decode at the storage boundary.

use studyhub_core::{Resource, ResourceKind, Stored};
use uuid::Uuid;

use crate::Store;
use crate::error::StoreResult;

/// Repository providing typed access to the store.
///
/// One instance serves all three collections: the operations are generic
/// over [`Resource`], so each route set binds its own kind at the call
/// site.
#[derive(Debug, Clone)]
pub struct Repository {
    store: Store,
}

impl Repository {
    /// Create a new repository wrapping the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// List every record in the kind's collection, store-native order.
    pub async fn list<R: Resource>(&self) -> StoreResult<Vec<Stored<R::Fields>>> {
        let rows = self.store.list_documents(R::KIND).await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(Stored {
                id: row.id,
                fields: row.decode_fields()?,
            });
        }
        Ok(records)
    }

    /// Persist a new record, returning it with its store-assigned id.
    pub async fn create<R: Resource>(&self, fields: &R::Fields) -> StoreResult<Stored<R::Fields>> {
        let document = encode_fields(fields)?;
        let row = self.store.insert_document(R::KIND, &document).await?;

        Ok(Stored {
            id: row.id,
            fields: row.decode_fields()?,
        })
    }

    /// Merge the provided fields into an existing record.
    ///
    /// Returns whether a record with the id existed. A miss is not an
    /// error: the merge is an idempotent no-op on absent ids.
    pub async fn update<R: Resource>(&self, id: Uuid, patch: &R::Fields) -> StoreResult<bool> {
        let patch = encode_fields(patch)?;
        self.store.update_document(R::KIND, id, &patch).await
    }

    /// Remove a record. Returns whether one existed (idempotent).
    pub async fn delete(&self, kind: ResourceKind, id: Uuid) -> StoreResult<bool> {
        self.store.delete_document(kind, id).await
    }
}

/// Serialize a field bag to its JSONB document shape.
///
/// Absent fields serialize to absent keys, so a patch never clears fields
/// the caller did not provide.
fn encode_fields<F: serde::Serialize>(fields: &F) -> StoreResult<serde_json::Value> {
    Ok(serde_json::to_value(fields)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhub_core::{NoteFields, ToolFields};

    #[test]
    fn test_encode_drops_absent_fields() {
        let patch = ToolFields {
            description: Some("updated".to_string()),
            ..Default::default()
        };
        let document = encode_fields(&patch).unwrap();
        let obj = document.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["description"], "updated");
    }

    #[test]
    fn test_encode_empty_patch_is_empty_object() {
        let document = encode_fields(&NoteFields::default()).unwrap();
        assert_eq!(document, serde_json::json!({}));
    }

    #[test]
    fn test_encode_uses_wire_names() {
        let fields = NoteFields {
            file_url: Some("http://x/a.pdf".to_string()),
            ..Default::default()
        };
        let document = encode_fields(&fields).unwrap();
        assert!(document.as_object().unwrap().contains_key("fileUrl"));
    }
}
