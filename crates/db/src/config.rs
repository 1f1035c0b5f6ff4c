//! # Database Configuration Module
//!
//! Loads settings for binaries that talk to the session store.
//!
//! ## Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{eyre, Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for connecting to the session store
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use timetable_db::config::DbConfig;
///
/// fn example() -> Result<()> {
///     let config = DbConfig::from_env()?;
///     println!("Using a pool of {} connections", config.max_connections);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL database connection string
    pub database_url: String,

    /// Maximum number of pooled connections
    pub max_connections: u32,

    /// Log level for the application
    pub log_level: Level,
}

impl DbConfig {
    /// Creates a new DbConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The DATABASE_MAX_CONNECTIONS value cannot be parsed as a u32
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a new DbConfig reading each variable through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Database settings
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .wrap_err("Invalid DATABASE_MAX_CONNECTIONS value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            database_url,
            max_connections,
            log_level,
        })
    }
}
