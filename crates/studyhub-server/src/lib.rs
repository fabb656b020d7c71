//! studyhub-server: HTTP API server for the StudyHub resource collections
//!
//! This crate provides:
//! - REST CRUD endpoints for the notes, videos, and tools collections
//! - JSON error responses with stable classification codes
//! - Static file serving for the bundled web UI
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! The three collections share one generic route module; each kind is an
//! instantiation of the same handler set over its [`studyhub_core::Resource`]
//! implementation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use studyhub_server::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     // see src/main.rs for the full startup sequence
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use studyhub_core;
pub use studyhub_store;
