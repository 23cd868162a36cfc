//! Configuration loading from environment.
//!
//! Every setting has a default, so an empty environment yields the fixed
//! deployment: port 8080, `cotacoes.db` in the working directory, and the
//! public AwesomeAPI endpoint.

use std::env;

use exchange_rates::AwesomeApiProvider;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://cotacoes.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub upstream_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let upstream_url = lookup("UPSTREAM_URL")
            .unwrap_or_else(|| AwesomeApiProvider::DEFAULT_BASE_URL.to_string());

        Ok(Self {
            port,
            database_url,
            upstream_url,
        })
    }
}
