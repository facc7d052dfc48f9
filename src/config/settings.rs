//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_USER_STORE_PATH,
};
use crate::domain::HashCost;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub server_host: String,
    pub server_port: u16,
    pub hash_cost: HashCost,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_USER_STORE_PATH),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            hash_cost: HashCost::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    ///
    /// Unset or unparsable values fall back to the defaults in `constants`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            store_path: env::var("USER_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_USER_STORE_PATH)),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
            hash_cost: HashCost {
                memory_kib: parse_var("PASSWORD_HASH_MEMORY_KIB").unwrap_or(DEFAULT_HASH_MEMORY_KIB),
                iterations: parse_var("PASSWORD_HASH_ITERATIONS").unwrap_or(DEFAULT_HASH_ITERATIONS),
                parallelism: parse_var("PASSWORD_HASH_PARALLELISM")
                    .unwrap_or(DEFAULT_HASH_PARALLELISM),
            },
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
