//! Error types for the Wikipedia client

use std::fmt;

/// Errors that can occur when talking to the MediaWiki API
#[derive(Debug)]
pub enum WikipediaError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// API answered with a non-success status
    Status(u16),
}

impl fmt::Display for WikipediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Wikipedia HTTP error: {}", e),
            Self::Json(e) => write!(f, "Wikipedia JSON parse error: {}", e),
            Self::Status(code) => write!(f, "Wikipedia API returned status {}", code),
        }
    }
}

impl std::error::Error for WikipediaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for WikipediaError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for WikipediaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for Wikipedia API operations
pub type Result<T> = std::result::Result<T, WikipediaError>;
