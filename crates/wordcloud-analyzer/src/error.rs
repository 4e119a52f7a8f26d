//! Error types for the wordcloud analyzer

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AnalyzerError {
    Cache(category_cache::CacheError),
    Wikipedia(wikipedia_client::WikipediaError),
    Io(Box<std::io::Error>),
    Config(String),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerError::Cache(err) => write!(f, "Cache error: {}", err),
            AnalyzerError::Wikipedia(err) => write!(f, "{}", err),
            AnalyzerError::Io(err) => write!(f, "IO error: {}", err),
            AnalyzerError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzerError::Cache(err) => Some(err),
            AnalyzerError::Wikipedia(err) => Some(err),
            AnalyzerError::Io(err) => Some(err.as_ref()),
            AnalyzerError::Config(_) => None,
        }
    }
}

impl From<category_cache::CacheError> for AnalyzerError {
    fn from(err: category_cache::CacheError) -> Self {
        AnalyzerError::Cache(err)
    }
}

impl From<wikipedia_client::WikipediaError> for AnalyzerError {
    fn from(err: wikipedia_client::WikipediaError) -> Self {
        AnalyzerError::Wikipedia(err)
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        AnalyzerError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for AnalyzerError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        AnalyzerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Error type for HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Upstream(AnalyzerError),
    Internal(AnalyzerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream fetch failed");
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<AnalyzerError> for ApiError {
    fn from(err: AnalyzerError) -> Self {
        match err {
            AnalyzerError::Wikipedia(_) => ApiError::Upstream(err),
            _ => ApiError::Internal(err),
        }
    }
}
