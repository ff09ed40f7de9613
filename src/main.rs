//! Nieuwe Vloer backend - Main entry point
//!
//! Loads configuration, wires the store and service layer together, and
//! serves the HTTP API. The process starts even without a configured
//! document store; the write path then fails as a server fault while the
//! read-only endpoints keep working.

use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use vloer_api::store::{DocumentStore, MongoStore};
use vloer_api::{AppState, Config, ContactServiceImpl};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can feed the filter fallback
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    // Initialize the document store when a connection string is present.
    // Driver setup is lazy, so an unreachable server only surfaces once a
    // request actually hits the store.
    let store: Option<Arc<dyn DocumentStore>> = match config.database_url.as_deref() {
        Some(url) => match MongoStore::connect(url, &config.database_name).await {
            Ok(store) => {
                info!(database = %config.database_name, "Document store initialized");
                Some(Arc::new(store) as Arc<dyn DocumentStore>)
            }
            Err(e) => {
                error!("Failed to initialize document store: {}", e);
                None
            }
        },
        None => {
            warn!("DATABASE_URL not set; contact submissions will fail until it is configured");
            None
        }
    };

    let service = Arc::new(ContactServiceImpl::new(store.clone()));
    let state = AppState::new(service, store);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Listening on 0.0.0.0:{}", config.port);

    vloer_api::run_server(listener, state).await?;

    Ok(())
}
