//! HTTP request handlers.

use super::types::LookupParams;
use super::AppState;
use crate::error::ProxyError;
use crate::validate::is_ten_digit_number;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

/// Proxy a phone-number lookup to the upstream API.
///
/// Upstream bodies that parse as JSON are passed through verbatim:
/// any 2xx becomes 200, and any other upstream status is propagated
/// unchanged together with its body. Only locally-detected failures
/// (bad input, non-JSON upstream, transport faults) get the error
/// envelope.
pub async fn lookup(
    State(state): State<AppState>,
    params: Result<Query<LookupParams>, QueryRejection>,
) -> Result<Response, ProxyError> {
    // A query string the extractor cannot decode (duplicate `number`,
    // broken percent-encoding) is the same as a bad number: it gets
    // the envelope, not a bare 400
    let Query(params) = params.map_err(|_| ProxyError::InvalidNumber)?;

    let number = params.number.trim();

    if !is_ten_digit_number(number) {
        warn!("Rejected lookup with malformed number");
        return Err(ProxyError::InvalidNumber);
    }

    info!(number = %number, "Lookup request received");

    let reply = state.upstream.lookup(number).await?;

    let status = if reply.is_success() {
        StatusCode::OK
    } else {
        StatusCode::from_u16(reply.status).map_err(|_| {
            ProxyError::Internal(format!("upstream returned invalid status {}", reply.status))
        })?
    };

    Ok((status, Json(reply.body)).into_response())
}
