//! studyhub-store: document storage layer for StudyHub
//!
//! This crate provides:
//! - PostgreSQL storage for the notes, videos, and tools collections
//! - JSONB documents with merge-update semantics
//! - Migration management
//! - Type-safe database operations via sqlx
//!
//! # Architecture
//!
//! Each collection is one table with an immutable `id` column and a JSONB
//! `fields` column. The raw [`Store`] works at the document level
//! (rows and JSON values); the [`Repository`] wraps it with the typed
//! resource model from studyhub-core.
//!
//! # Usage
//!
//! ```rust,ignore
//! use studyhub_core::Note;
//! use studyhub_store::{Repository, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//! let repository = Repository::new(store);
//!
//! // Insert a record
//! let record = repository.create::<Note>(&fields).await?;
//!
//! // Query records
//! let notes = repository.list::<Note>().await?;
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::DocumentRow;
pub use repository::Repository;
pub use store::{Store, StoreConfig};

// Re-export studyhub-core for downstream crates
pub use studyhub_core;
