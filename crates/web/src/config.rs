//! Runtime configuration, read once at startup from the environment.

use std::env;

/// Built-in fallback used when `SECRET_KEY` is unset. Fine for local
/// development, useless for anything exposed to a network.
pub const DEFAULT_SECRET: &str = "dev-secret-key";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file (`DATABASE`).
    pub database: String,
    /// Material for the flash-cookie signing key (`SECRET_KEY`).
    pub secret_key: String,
    /// Debug mode: human-readable logs at `debug` level (`PANTRY_DEBUG`).
    pub debug: bool,
    /// Socket address the server binds (`LISTEN_ADDR`).
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database: env::var("DATABASE").unwrap_or_else(|_| "grocery.db".to_string()),
            secret_key: env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            debug: env::var("PANTRY_DEBUG")
                .map(|value| is_truthy(&value))
                .unwrap_or(false),
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string()),
        }
    }

    /// True when the insecure built-in secret is in use.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
