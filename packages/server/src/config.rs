use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub ticketmaster_api_key: String,
    pub ticketmaster_base_url: Option<String>,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("ticketmaster_api_key", &self.masked_api_key())
            .field("ticketmaster_base_url", &self.ticketmaster_base_url)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        if dotenv().is_err() {
            tracing::info!("No .env file found, relying on process environment");
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            ticketmaster_api_key: lookup("TICKETMASTER_API_KEY")
                .filter(|key| !key.trim().is_empty())
                .context("TICKETMASTER_API_KEY must be set")?,
            ticketmaster_base_url: lookup("TICKETMASTER_BASE_URL")
                .filter(|url| !url.trim().is_empty()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./static")),
        })
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.ticketmaster_api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}
