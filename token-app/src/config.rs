//! Configuration loading from environment.

use std::env;

use token_hex::inbound::DEFAULT_BASE_PATH;
use token_types::Secret;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub secret: Secret,
    pub base_path: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()?;

        let secret = lookup("TOKEN_SECRET")
            .ok_or_else(|| anyhow::anyhow!("TOKEN_SECRET environment variable is required"))
            .and_then(|value| {
                Secret::new(value)
                    .map_err(|_| anyhow::anyhow!("TOKEN_SECRET environment variable is required"))
            })?;

        let base_path = lookup("TOKEN_BASE_PATH").unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());

        Ok(Self {
            port,
            secret,
            base_path,
        })
    }
}
