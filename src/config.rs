use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{AppError, Result};

pub const API_KEY_VAR: &str = "FIRECRAWL_API_KEY";
pub const API_URL_VAR: &str = "FIRECRAWL_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev/v2/scrape";
pub const DEFAULT_OUTPUT_DIR: &str = "brand_output";

const API_TIMEOUT: Duration = Duration::from_secs(60);
const ASSET_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub api_timeout: Duration,
    pub asset_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(AppError::MissingCredential(API_KEY_VAR))?;

        let api_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Url::parse(&api_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid {}: {}", API_URL_VAR, e)))?;

        Ok(Config {
            api_key,
            api_url,
            api_timeout: API_TIMEOUT,
            asset_timeout: ASSET_TIMEOUT,
        })
    }
}
