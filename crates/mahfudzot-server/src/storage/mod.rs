//! Storage layer
//!
//! PostgreSQL through sqlx when the database is reachable, an in-memory copy
//! of the seed catalog otherwise.

pub mod db;
pub mod memory;

pub use db::PgQuoteStore;
pub use memory::MemoryQuoteStore;

use crate::config::DatabaseConfig;
use mahfudzot_core::{QuoteStore, SEED_CATALOG};
use std::sync::Arc;
use tracing::{info, warn};

/// Pick the backend for this process.
///
/// Connecting is attempted exactly once. Any failure (bad settings,
/// unreachable server, failed probe) degrades to the in-memory backend.
pub async fn connect(config: &DatabaseConfig) -> Arc<dyn QuoteStore> {
    match PgQuoteStore::connect(config).await {
        Ok(store) => {
            info!("Connected to database successfully");
            Arc::new(store)
        }
        Err(e) => {
            warn!("Database connection failed: {}", e);
            warn!(
                "Running in demo mode with {} in-memory quotes",
                SEED_CATALOG.len()
            );
            Arc::new(MemoryQuoteStore::from_catalog(SEED_CATALOG))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        database: DatabaseConfig,
    }

    #[tokio::test]
    async fn test_falls_back_to_memory_on_bad_sslmode() {
        let args = Wrapper::try_parse_from(["test", "--db-sslmode", "sometimes"]).unwrap();

        let store = connect(&args.database).await;
        assert_eq!(store.backend_name(), "memory");
        assert_eq!(store.count().await.unwrap(), SEED_CATALOG.len() as i64);
    }

    #[tokio::test]
    async fn test_falls_back_to_memory_when_unreachable() {
        // Port 1 on loopback refuses connections.
        let args = Wrapper::try_parse_from([
            "test",
            "--db-host",
            "127.0.0.1",
            "--db-port",
            "1",
            "--db-connect-timeout-secs",
            "1",
        ])
        .unwrap();

        let store = connect(&args.database).await;
        assert_eq!(store.backend_name(), "memory");
    }
}
