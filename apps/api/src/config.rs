use anyhow::{Context, Result};

use crate::locale::Locale;

/// Application configuration loaded from environment variables.
/// Startup fails fast when a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub auth_base_url: String,
    pub auth_api_key: String,
    pub payment_base_url: String,
    pub payment_api_key: String,
    pub data_dir: String,
    pub mock_delay_ms: u64,
    pub default_locale: Locale,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            auth_base_url: require_env("AUTH_BASE_URL")?,
            auth_api_key: require_env("AUTH_API_KEY")?,
            payment_base_url: require_env("PAYMENT_BASE_URL")?,
            payment_api_key: require_env("PAYMENT_API_KEY")?,
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            mock_delay_ms: std::env::var("MOCK_DELAY_MS")
                .unwrap_or_else(|_| "800".to_string())
                .parse::<u64>()
                .context("MOCK_DELAY_MS must be a number of milliseconds")?,
            default_locale: Locale::from_tag(
                &std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string()),
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
