#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} environment variable not set")]
    MissingCredential(&'static str),

    #[error("Error calling Firecrawl API: {0}")]
    RemoteCallError(String),

    #[error("Failed to download asset: {0}")]
    AssetFetchError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize brand data: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RemoteCallError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
