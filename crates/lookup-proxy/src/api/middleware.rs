//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, warn};

/// Log method, path, status and latency for every request.
///
/// Only the path is logged, not the query string, so caller-supplied
/// numbers stay out of the request log.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = start.elapsed();

    if status.is_server_error() {
        warn!(%method, %path, %status, ?elapsed, "Request failed");
    } else {
        debug!(%method, %path, %status, ?elapsed, "Request completed");
    }

    response
}
