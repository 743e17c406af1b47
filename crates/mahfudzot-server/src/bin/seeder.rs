//! Mahfudzot Seeder
//!
//! Fills the PostgreSQL quotes table with the embedded seed catalog.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use mahfudzot_core::{seed_store, QuoteStore, SEED_CATALOG};
use mahfudzot_server::config::{DatabaseConfig, LogFormat};
use mahfudzot_server::logging;
use mahfudzot_server::storage::PgQuoteStore;

#[derive(Parser)]
#[command(name = "mahfudzot-seeder")]
#[command(version, about = "Seed the quotes table with the embedded mahfudzot catalog", long_about = None)]
struct Cli {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Seed even if the table already contains quotes
    #[arg(short, long)]
    force: bool,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.log_format) {
        eprintln!("[FATAL] {}", e);
        std::process::exit(1);
    }
    logging::install_panic_hook();

    if let Err(e) = run(cli).await {
        error!("Seeding failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = PgQuoteStore::connect(&cli.database)
        .await
        .context("Failed to connect to database")?;

    if !cli.force {
        let existing = store
            .count()
            .await
            .context("Failed to check existing data")?;
        if existing > 0 {
            info!(
                "Database already contains {} quotes. Use --force to seed anyway.",
                existing
            );
            return Ok(());
        }
    }

    info!("Starting database seeding...");
    seed_store(&store, SEED_CATALOG)
        .await
        .context("Failed to seed database")?;

    match store.count().await {
        Ok(total) => info!("Database seeding completed. Total quotes: {}", total),
        Err(e) => warn!("Failed to verify seeding: {}", e),
    }

    Ok(())
}
