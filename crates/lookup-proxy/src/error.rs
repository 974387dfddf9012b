//! Error types for the lookup proxy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lookup_client::LookupError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Proxy error types.
///
/// Every variant renders as the JSON envelope
/// `{"status":"error","message":...}` with a fixed, caller-facing
/// message. Internal detail is logged, never surfaced.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Invalid mobile number")]
    InvalidNumber,

    #[error("Upstream returned non-JSON")]
    UpstreamMalformed,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body of a locally-generated error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub message: &'static str,
}

impl ErrorEnvelope {
    fn new(message: &'static str) -> Self {
        Self {
            status: "error",
            message,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ProxyError::InvalidNumber => (StatusCode::BAD_REQUEST, "Invalid mobile number"),
            ProxyError::UpstreamMalformed => {
                (StatusCode::BAD_GATEWAY, "Upstream returned non-JSON")
            }
            ProxyError::Internal(detail) => {
                error!(detail = %detail, "Lookup proxy fault");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };

        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}

impl From<LookupError> for ProxyError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NonJson => ProxyError::UpstreamMalformed,
            LookupError::Http(e) => ProxyError::Internal(e.to_string()),
        }
    }
}
