use reqwest::Client;
use tracing::debug;

use crate::api::models::{ScrapeData, ScrapeRequest};
use crate::api::response::ScrapeOutcome;
use crate::config::Config;
use crate::error::{AppError, Result};

pub struct FirecrawlClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl FirecrawlClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.api_timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Requests branding, markdown and a screenshot for `url` in one call.
    pub async fn scrape(&self, url: &str) -> Result<ScrapeData> {
        debug!(endpoint = %self.endpoint, url, "Calling Firecrawl scrape");

        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ScrapeRequest::new(url))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            return Err(AppError::RemoteCallError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                message
            )));
        }

        let body = res.text().await?;
        let outcome: ScrapeOutcome = serde_json::from_str(&body)
            .map_err(|e| AppError::RemoteCallError(format!("Invalid response body: {}", e)))?;

        outcome.into_data()
    }
}
