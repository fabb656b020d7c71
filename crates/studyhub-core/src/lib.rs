//! studyhub-core: shared domain types for the StudyHub resource API.
//!
//! This crate defines:
//! - The three resource kinds (notes, videos, tools) and their field bags
//! - The [`Resource`] trait, the one generic shape the server and store
//!   instantiate per kind instead of hand-duplicating route sets
//! - The [`Stored`] envelope pairing a store-assigned id with a field bag

pub mod types;

pub use types::{
    Note, NoteFields, Resource, ResourceKind, Stored, Tool, ToolFields, Video, VideoFields,
};
