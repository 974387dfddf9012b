//! API request types.

use serde::Deserialize;

/// Query parameters for `GET /api/lookup`.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    /// Caller-supplied phone number. A missing parameter is treated
    /// the same as an empty one and rejected by validation.
    #[serde(default)]
    pub number: String,
}
