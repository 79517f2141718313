use crate::errors::ServerError;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Simulated latency before the listings become visible.
    pub load_delay: Duration,
    /// JSON dataset to serve instead of the bundled one.
    pub listings_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ServerError> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|e| ServerError::Config(format!("BIND_ADDR must be host:port: {e}")))?;

        let max_workers = lookup("MAX_WORKERS")
            .unwrap_or_else(|| "8".to_string())
            .parse()
            .map_err(|e| ServerError::Config(format!("MAX_WORKERS must be a number: {e}")))?;

        let load_delay_ms: u64 = lookup("LOAD_DELAY_MS")
            .unwrap_or_else(|| "800".to_string())
            .parse()
            .map_err(|e| ServerError::Config(format!("LOAD_DELAY_MS must be a number: {e}")))?;

        Ok(Self {
            bind_addr,
            max_workers,
            load_delay: Duration::from_millis(load_delay_ms),
            listings_file: lookup("LISTINGS_FILE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }
}
