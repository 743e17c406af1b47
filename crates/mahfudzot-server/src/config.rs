//! Startup configuration, read once from flags or environment variables

use clap::{ArgAction, Args, Parser, ValueEnum};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mahfudzot-server")]
#[command(version, about = "HTTP service for mahfudzot wisdom quotes", long_about = None)]
pub struct ServerConfig {
    /// Listen host
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Listen port
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Seed an empty database from the embedded catalog at startup
    #[arg(long, env = "SEED_IF_EMPTY", default_value_t = true, action = ArgAction::Set)]
    pub seed_if_empty: bool,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, Args)]
pub struct DatabaseConfig {
    #[arg(long = "db-host", id = "db_host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", id = "db_port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", id = "db_user", env = "DB_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "db-password",
        id = "db_password",
        env = "DB_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "db-name", id = "db_name", env = "DB_NAME", default_value = "mahfudzot")]
    pub name: String,

    /// disable, allow, prefer, require, verify-ca or verify-full
    #[arg(long = "db-sslmode", id = "db_sslmode", env = "DB_SSLMODE", default_value = "disable")]
    pub ssl_mode: String,

    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Give up on the database after this many seconds and use memory instead
    #[arg(long = "db-connect-timeout-secs", env = "DB_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    pub connect_timeout_secs: u64,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
