use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum CatalogError {
    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(String),

    #[error("Serde error: {0}")]
    Serde(String),
}
