//! Error types for the category cache

use std::fmt;

/// Hard failures surfaced to callers. Misses are never errors.
#[derive(Debug)]
pub enum CacheError {
    /// Filesystem operation failed
    Io(std::io::Error),
    /// Payload could not be serialized to JSON
    Json(serde_json::Error),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Cache IO error: {}", e),
            Self::Json(e) => write!(f, "Cache serialization error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CacheError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;
