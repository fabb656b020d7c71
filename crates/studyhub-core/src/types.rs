//! Core data types for the StudyHub resource collections.
//!
//! Three resource kinds share one structural shape: a store-assigned id plus
//! a flat bag of optional string fields. The [`Resource`] trait captures that
//! shape once; the server instantiates its route set and the store its
//! repository methods over it, instead of hand-duplicating them per kind.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Resource Kinds
// ============================================================================

/// The three resource collections served by the API.
///
/// Carries the naming conventions each collection uses on the wire: the
/// plural collection name (table and URL segment), the singular name (JSON
/// key for a created record), and the capitalized name used in confirmation
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Note,
    Video,
    Tool,
}

impl ResourceKind {
    /// All kinds, in route-registration order.
    pub const ALL: [ResourceKind; 3] = [Self::Note, Self::Video, Self::Tool];

    /// Collection name: the table name and the URL path segment.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Note => "notes",
            Self::Video => "videos",
            Self::Tool => "tools",
        }
    }

    /// Singular name: the JSON key carrying a created record.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Video => "video",
            Self::Tool => "tool",
        }
    }

    /// Capitalized name used in confirmation messages ("Note added").
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Video => "Video",
            Self::Tool => "Tool",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

// ============================================================================
// The Generic Resource Shape
// ============================================================================

/// A resource kind together with its typed field bag.
///
/// Implemented by the three marker types [`Note`], [`Video`], and [`Tool`].
/// Everything the route handlers and the repository need — collection name,
/// message wording, patch type — hangs off this trait, so the CRUD surface
/// is written once and instantiated three times.
pub trait Resource: Send + Sync + 'static {
    /// Which collection this resource lives in.
    const KIND: ResourceKind;

    /// The mutable fields of a record.
    ///
    /// Doubles as the create body and the merge-update patch: every field is
    /// optional, unknown fields are dropped on deserialize, and absent fields
    /// are omitted on serialize so they never overwrite stored values.
    type Fields: Serialize
        + DeserializeOwned
        + Default
        + Clone
        + fmt::Debug
        + Send
        + Sync
        + 'static;
}

/// A persisted record: the store-assigned id plus the field bag, flattened
/// to the wire shape `{"id": ..., "title": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<F> {
    /// Assigned by the store on creation; never overwritten by updates.
    pub id: Uuid,
    /// The record's mutable fields.
    #[serde(flatten)]
    pub fields: F,
}

// ============================================================================
// Field Bags
// ============================================================================

/// Fields of a note: a downloadable document with a title and category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Fields of a video resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Fields of a tool: a linked utility with an image and optional blurb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

// ============================================================================
// Marker Types
// ============================================================================

/// Marker type for the notes collection.
#[derive(Debug, Clone, Copy)]
pub struct Note;

impl Resource for Note {
    const KIND: ResourceKind = ResourceKind::Note;
    type Fields = NoteFields;
}

/// Marker type for the videos collection.
#[derive(Debug, Clone, Copy)]
pub struct Video;

impl Resource for Video {
    const KIND: ResourceKind = ResourceKind::Video;
    type Fields = VideoFields;
}

/// Marker type for the tools collection.
#[derive(Debug, Clone, Copy)]
pub struct Tool;

impl Resource for Tool {
    const KIND: ResourceKind = ResourceKind::Tool;
    type Fields = ToolFields;
}

// ============================================================================
// Tests
// ============================================================================
