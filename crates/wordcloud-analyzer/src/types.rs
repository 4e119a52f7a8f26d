//! Request and response types for the wordcloud analyzer

use crate::text::{WordCount, WordFrequencies};
use category_cache::CacheStats;
use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub category: String,
    pub frequencies: WordFrequencies,
    pub top_words: Vec<WordCount>,
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_pages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_stats: Option<CacheStats>,
}

/// Query of `GET /cache/cleanup`
#[derive(Debug, Default, Deserialize)]
pub struct CleanupQuery {
    pub max_age_hours: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub cleaned_entries: usize,
    pub stats: CacheStats,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub cache: CacheStats,
}
