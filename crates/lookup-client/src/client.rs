//! Upstream lookup API HTTP client.

use crate::error::LookupError;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Client for the third-party phone-number lookup API.
///
/// The API key is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output. The request URL embeds the key,
/// so it is never logged either.
#[derive(Clone)]
pub struct LookupClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

/// Upstream outcome: the HTTP status plus the body parsed as JSON.
///
/// The body is opaque to this crate. Callers pass it through without
/// interpreting its schema.
#[derive(Debug, Clone)]
pub struct LookupReply {
    pub status: u16,
    pub body: Value,
}

impl LookupReply {
    /// Whether the upstream reported success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl LookupClient {
    /// Create a new lookup client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    /// Look up a phone number.
    ///
    /// Issues exactly one GET request; no retry. The upstream HTTP
    /// status is captured as-is, and a body that does not parse as
    /// JSON is reported as [`LookupError::NonJson`] regardless of that
    /// status.
    #[instrument(skip(self))]
    pub async fn lookup(&self, number: &str) -> Result<LookupReply, LookupError> {
        let url = format!(
            "{}?key={}&number={}",
            self.base_url,
            encode(self.api_key.expose_secret()),
            encode(number)
        );

        debug!(number = %number, "Sending lookup request");

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        let body: Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(_) => {
                warn!(status = status, "Upstream returned a non-JSON body");
                return Err(LookupError::NonJson);
            }
        };

        debug!(status = status, "Lookup response received");

        Ok(LookupReply { status, body })
    }
}
