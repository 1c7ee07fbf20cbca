//! Application configuration loaded from environment variables.

use std::env;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 4000;

/// Path serving GraphQL over HTTP and WebSocket.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Load the demo users and activities at startup
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_data: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", v))?,
            Err(_) => DEFAULT_PORT,
        };

        let seed_data = match env::var("SEED_DATA") {
            Ok(v) => parse_bool(&v).ok_or(ConfigError::Invalid("SEED_DATA", v))?,
            Err(_) => true,
        };

        Ok(Self { port, seed_data })
    }

    /// Config for tests: seeded store, default port.
    pub fn test_default() -> Self {
        Self::default()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
