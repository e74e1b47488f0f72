use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Generated engineers appended to the base fixtures at startup.
    pub mock_engineers: usize,
    /// Generated positions appended to the base fixtures at startup.
    pub mock_positions: usize,
    pub mock_seed: Option<u64>,
    /// Largest engineers × positions product one matching run may evaluate.
    pub match_pair_limit: usize,
    pub match_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            mock_engineers: env_or("MOCK_ENGINEERS", 94)?,
            mock_positions: env_or("MOCK_POSITIONS", 295)?,
            mock_seed: optional_env("MOCK_SEED")?,
            match_pair_limit: env_or("MATCH_PAIR_LIMIT", 1_000_000)?,
            match_timeout_secs: env_or("MATCH_TIMEOUT_SECS", 30)?,
        })
    }

    /// Defaults with no environment lookups and an empty demo population.
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            mock_engineers: 0,
            mock_positions: 0,
            mock_seed: Some(0),
            match_pair_limit: 1_000_000,
            match_timeout_secs: 30,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(optional_env(key)?.unwrap_or(default))
}

fn optional_env<T: FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}
