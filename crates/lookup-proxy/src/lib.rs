//! Number Lookup Proxy - HTTP reverse proxy for a phone-number lookup API.
//!
//! The proxy sits between a static frontend and the third-party lookup
//! API to:
//! - Validate the caller-supplied number before anything leaves the process
//! - Keep the upstream API key server-side only
//! - Map upstream outcomes to a small JSON envelope or a verbatim pass-through

pub mod api;
pub mod config;
pub mod error;
pub mod validate;

pub use config::Config;
pub use error::ProxyError;
