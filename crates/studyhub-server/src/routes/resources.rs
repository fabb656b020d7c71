//! Generic CRUD routes, instantiated once per resource kind.
//!
//! This module implements the four operations every collection exposes:
//! - GET /{collection} - list all records
//! - POST /{collection} - create from a partial record
//! - PUT /{collection}/{id} - merge-update the fields provided
//! - DELETE /{collection}/{id} - idempotent delete
//!
//! Update and delete succeed whether or not the id matched a record; a
//! miss is logged, never surfaced. Path ids are parsed inside the handlers
//! so a malformed id collapses to the same 500 shape as a store failure
//! rather than an extractor-level 400.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use serde::{Serialize, ser::SerializeMap};
use uuid::Uuid;

use studyhub_core::{Resource, Stored};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Response for POST /{collection}.
///
/// Carries the confirmation message plus the stored record keyed by the
/// kind's singular name: `{"message": "Note added", "note": {...}}`.
#[derive(Debug)]
pub struct CreateResponse<R: Resource> {
    /// Confirmation message ("Note added").
    pub message: String,
    /// The record as persisted, with its assigned id.
    pub record: Stored<R::Fields>,
}

impl<R: Resource> CreateResponse<R> {
    fn new(record: Stored<R::Fields>) -> Self {
        Self {
            message: format!("{} added", R::KIND.display_name()),
            record,
        }
    }
}

impl<R: Resource> Serialize for CreateResponse<R> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // The record key varies per instantiation while the struct stays
        // generic, so the map is built by hand.
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry(R::KIND.singular(), &self.record)?;
        map.end()
    }
}

/// Response for PUT and DELETE: a bare confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /{collection} - List all records, store-native order.
async fn list<R: Resource>(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Stored<R::Fields>>>> {
    let records = state
        .repository()
        .list::<R>()
        .await
        .map_err(|e| ApiError::store(format!("Failed to fetch {}", R::KIND.collection()), e))?;

    tracing::debug!(
        collection = R::KIND.collection(),
        count = records.len(),
        "Listed records"
    );

    Ok(Json(records))
}

/// POST /{collection} - Create a record from a partial field bag.
///
/// No field-presence validation: an empty body stores a record with only
/// an id. Unknown fields are dropped by the typed deserialize.
async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(fields): Json<R::Fields>,
) -> ApiResult<Json<CreateResponse<R>>> {
    let record = state
        .repository()
        .create::<R>(&fields)
        .await
        .map_err(|e| ApiError::store(format!("Failed to add {}", R::KIND.singular()), e))?;

    tracing::info!(
        collection = R::KIND.collection(),
        id = %record.id,
        "Record created"
    );

    Ok(Json(CreateResponse::new(record)))
}

/// PUT /{collection}/{id} - Merge the provided fields into a record.
///
/// Fields absent from the body are left untouched. A miss is an idempotent
/// no-op: the response is the same success message either way.
async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<R::Fields>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id, "Update failed")?;

    let matched = state
        .repository()
        .update::<R>(id, &patch)
        .await
        .map_err(|e| ApiError::store("Update failed", e))?;

    if matched {
        tracing::info!(collection = R::KIND.collection(), id = %id, "Record updated");
    } else {
        tracing::debug!(
            collection = R::KIND.collection(),
            id = %id,
            "Update matched no record"
        );
    }

    Ok(Json(MessageResponse {
        message: format!("{} updated", R::KIND.display_name()),
    }))
}

/// DELETE /{collection}/{id} - Remove a record if present.
///
/// Idempotent: deleting an absent id returns the same success message.
async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id, "Delete failed")?;

    let existed = state
        .repository()
        .delete(R::KIND, id)
        .await
        .map_err(|e| ApiError::store("Delete failed", e))?;

    if existed {
        tracing::info!(collection = R::KIND.collection(), id = %id, "Record deleted");
    } else {
        tracing::debug!(
            collection = R::KIND.collection(),
            id = %id,
            "Delete matched no record"
        );
    }

    Ok(Json(MessageResponse {
        message: format!("{} deleted", R::KIND.display_name()),
    }))
}

/// Parse a path id inside the handler so a malformed value fails like a
/// store error (500), not like a rejected extractor (400).
fn parse_id(raw: &str, message: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|e| ApiError::invalid_id(message, e))
}

/// Build the four CRUD routes for one resource kind.
pub fn routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::KIND.collection());
    let by_id = format!("{}/{{id}}", collection);

    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&by_id, put(update::<R>).delete(remove::<R>))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use studyhub_core::{Note, NoteFields, Tool, ToolFields, Video};

    #[test]
    fn test_create_response_keys_record_by_singular_name() {
        let response: CreateResponse<Note> = CreateResponse::new(Stored {
            id: Uuid::nil(),
            fields: NoteFields {
                title: Some("Algebra".to_string()),
                file_url: Some("http://x/a.pdf".to_string()),
                category: Some("math".to_string()),
            },
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Note added");
        assert_eq!(json["note"]["title"], "Algebra");
        assert_eq!(json["note"]["fileUrl"], "http://x/a.pdf");
        assert_eq!(json["note"]["id"], Uuid::nil().to_string());
        assert!(json.get("record").is_none());
    }

    #[test]
    fn test_create_response_for_tool_uses_tool_key() {
        let response: CreateResponse<Tool> = CreateResponse::new(Stored {
            id: Uuid::nil(),
            fields: ToolFields::default(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Tool added");
        assert!(json.get("tool").is_some());
    }

    #[test]
    fn test_message_response_serialize() {
        let response = MessageResponse {
            message: "Video deleted".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Video deleted"}"#);
    }

    #[test]
    fn test_parse_id_accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Update failed").unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage_as_handler_error() {
        let err = parse_id("not-a-uuid", "Update failed").unwrap_err();
        assert_eq!(err.code(), "INVALID_ID");
        assert_eq!(err.to_string(), "Update failed");
    }

    #[test]
    fn test_routes_build_for_every_kind() {
        // Route construction panics on malformed paths; building each
        // instantiation is the assertion.
        let _ = routes::<Note>();
        let _ = routes::<Video>();
        let _ = routes::<Tool>();
    }
}
