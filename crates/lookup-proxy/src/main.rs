//! Number Lookup Proxy - Entry point.

use lookup_client::LookupClient;
use lookup_proxy::{
    api::{create_router, AppState},
    config::Config,
};
use secrecy::ExposeSecret;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Upstream hangs are bounded by this instead of being left open-ended.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    // Load configuration; the upstream credential is required, so a
    // misconfigured process dies here, before any listener is bound
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting number lookup proxy");

    // Initialize the upstream client
    let upstream = match LookupClient::new(
        config.upstream_url.clone(),
        config.api_key.expose_secret().to_owned(),
        UPSTREAM_TIMEOUT,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create lookup client: {}", e);
            std::process::exit(1);
        }
    };

    // Create application state and router
    let state = AppState::new(upstream);
    let app = create_router(state, &config.static_dir);

    // Bind to address
    let addr = SocketAddr::new(
        config.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.port(),
    );

    info!("Listening on {}", addr);
    info!("Serving static assets from {}", config.static_dir.display());

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
