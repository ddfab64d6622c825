// Error types for faqdesk.
// Handles FAQ API errors, cache errors, and the user-facing view errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("FAQ API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FAQ API rejected the request with status {0}")]
    Rejected(reqwest::StatusCode),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FaqError>;

/// Errors shown in the inline banner. The underlying cause is only logged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    #[error("Failed to fetch FAQs")]
    FetchFailed,

    #[error("Failed to add FAQ")]
    AddFailed,
}
