use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub db_busy_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let db_path = std::env::var("BOARD_DB_PATH").unwrap_or_else(|_| "board.db".into());
        let host = std::env::var("BOARD_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("BOARD_PORT")
            .unwrap_or_else(|_| "8013".into())
            .parse()
            .context("BOARD_PORT must be a port number")?;
        let busy_ms: u64 = std::env::var("BOARD_DB_BUSY_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .context("BOARD_DB_BUSY_TIMEOUT_MS must be a number of milliseconds")?;

        Ok(Self {
            db_path: db_path.into(),
            db_busy_timeout: Duration::from_millis(busy_ms),
            host,
            port,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> Config {
        Config {
            db_path: "board.db".into(),
            db_busy_timeout: Duration::from_secs(5),
            host: host.to_string(),
            port: 8013,
        }
    }

    #[test]
    fn addr_joins_host_and_port() {
        let addr = config("127.0.0.1").addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8013");
    }

    #[test]
    fn addr_rejects_hostnames() {
        assert!(config("not a host").addr().is_err());
    }
}
