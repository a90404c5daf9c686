use serde::Deserialize;
use serde_json::Value;

use crate::api::models::ScrapeData;
use crate::error::{AppError, Result};

/// Envelope every Firecrawl scrape response is wrapped in.
#[derive(Debug, Deserialize)]
pub struct ScrapeOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ScrapeOutcome {
    pub fn into_data(self) -> Result<ScrapeData> {
        if !self.success {
            let message = match self.error {
                Some(error) => error,
                None => format!("success flag not set (data: {})", self.data.unwrap_or(Value::Null)),
            };
            return Err(AppError::RemoteCallError(format!("API returned error: {}", message)));
        }

        match self.data {
            Some(data @ Value::Object(_)) => serde_json::from_value(data).map_err(|e| {
                AppError::RemoteCallError(format!("Invalid data object in response: {}", e))
            }),
            _ => Err(AppError::RemoteCallError(
                "Response is missing the data object".to_string(),
            )),
        }
    }
}
