use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeaconClientError {
    #[error("Request failed with status code: {status_code}")]
    RequestFailed { status_code: reqwest::StatusCode },

    #[error("No light client update found for period {period}")]
    NoUpdateFound { period: u64 },

    #[error("No block found at slot {slot}")]
    NoBlockFound { slot: u64 },

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
