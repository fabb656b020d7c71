//! Route definitions for the HTTP API.

pub mod health;
pub mod resources;

use axum::Router;
use tower_http::services::ServeDir;

use studyhub_core::{Note, Tool, Video};

use crate::state::AppState;

/// Build the complete router with all routes.
///
/// The three resource route sets are one generic module instantiated per
/// kind. Requests matching no API route fall through to the static asset
/// directory.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .merge(health::routes())
        .merge(resources::routes::<Note>())
        .merge(resources::routes::<Video>())
        .merge(resources::routes::<Tool>())
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .with_state(state)
}
