//! Database models for the storage layer.
//!
//! Records are stored as documents: an immutable `id` column plus a JSONB
//! `fields` column holding the mutable field bag. These row types map
//! directly to query results; typed conversions live in the repository.

use serde::de::DeserializeOwned;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row shared by all three collection tables.
#[derive(Debug, Clone, FromRow)]
pub struct DocumentRow {
    /// Store-assigned record identifier.
    pub id: Uuid,
    /// JSONB field bag; keys absent from the document are absent fields.
    pub fields: serde_json::Value,
}

impl DocumentRow {
    /// Decode the JSONB field bag into a typed field struct.
    pub fn decode_fields<F: DeserializeOwned>(&self) -> Result<F, serde_json::Error> {
        serde_json::from_value(self.fields.clone())
    }
}
