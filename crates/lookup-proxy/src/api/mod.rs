//! HTTP API for the lookup proxy.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use axum::{middleware as axum_middleware, routing::get, Router};
use lookup_client::LookupClient;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Upstream lookup client (owns the credential)
    pub upstream: Arc<LookupClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(upstream: LookupClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

/// Create the router: the lookup route plus static-file fallback.
///
/// Any path other than `/api/lookup` falls through to static file
/// resolution under `static_dir` before a 404.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/lookup", get(handlers::lookup))
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
