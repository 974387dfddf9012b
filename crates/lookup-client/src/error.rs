//! Lookup client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned a body that is not valid JSON")]
    NonJson,
}
