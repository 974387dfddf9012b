//! Configuration for the lookup proxy.

use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::PathBuf;

/// Port used when `PORT` is unset or not a number.
pub const DEFAULT_PORT: u16 = 3000;

/// Proxy configuration, loaded once at startup and immutable after.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Upstream API key. Required; the process refuses to start
    /// without it.
    pub api_key: SecretString,

    /// Listening port. Kept as the raw environment string so a
    /// non-numeric value falls back to the default instead of
    /// aborting startup.
    #[serde(default = "default_port")]
    port: String,

    /// Listen address.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Upstream lookup API base URL.
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Directory the static frontend is served from.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Log level, unless `RUST_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_upstream_url() -> String {
    "https://xwalletbot.shop/number.php".into()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when `API_KEY` is missing or blank; the caller is
    /// expected to exit before binding any listener.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().try_parsing(false))
            .build()
            .context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Missing API_KEY. Set it in the environment or a .env file")?;

        if config.api_key.expose_secret().trim().is_empty() {
            bail!("API_KEY is empty. Set it in the environment or a .env file");
        }

        Ok(config)
    }

    /// Listening port: `PORT`, falling back to 3000 when unset or
    /// non-numeric.
    pub fn port(&self) -> u16 {
        self.port.trim().parse().unwrap_or(DEFAULT_PORT)
    }
}
