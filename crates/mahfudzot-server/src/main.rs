//! Mahfudzot Server
//!
//! Serves the mahfudzot quote collection over HTTP. Connects to PostgreSQL
//! when possible and falls back to the embedded catalog in memory.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tracing::{error, info, warn};

use mahfudzot_core::SEED_CATALOG;
use mahfudzot_server::config::ServerConfig;
use mahfudzot_server::services::QuoteService;
use mahfudzot_server::{logging, router, storage, AppState};

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    if let Err(e) = logging::init_tracing(config.log_format) {
        eprintln!("[FATAL] {}", e);
        std::process::exit(1);
    }
    logging::install_panic_hook();

    info!("Starting Mahfudzot Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    info!(
        "Config loaded: bind={}, db={}:{}/{}",
        config.bind_address(),
        config.database.host,
        config.database.port,
        config.database.name
    );

    // Never fatal: falls back to memory
    let store = storage::connect(&config.database).await;
    let quotes = QuoteService::new(store);
    info!("Using {} storage backend", quotes.backend_name());

    if config.seed_if_empty {
        match quotes.seed_if_empty(SEED_CATALOG).await {
            Ok(Some(inserted)) => info!("Seeded empty store with {} quotes", inserted),
            Ok(None) => {}
            Err(e) => warn!("Seeding skipped: {}", e),
        }
    }

    let app = router(AppState::new(quotes), config.request_timeout());

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server ready to accept connections");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
