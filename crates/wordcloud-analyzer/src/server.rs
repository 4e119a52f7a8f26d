//! HTTP server for the analyzer endpoints
//!
//! Provides /health, /analyze, /cache/stats and /cache/cleanup.

use crate::analyzer::{CategoryAnalyzer, CategoryResult};
use crate::error::ApiError;
use crate::text::top_words;
use crate::types::{
    AnalyzeRequest, AnalyzeResponse, CleanupQuery, CleanupResponse, HealthResponse,
};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use category_cache::{CacheManager, CacheStats};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for the HTTP server
pub struct ServerState {
    pub cache: CacheManager,
    pub analyzer: CategoryAnalyzer,
    pub max_words: usize,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(cache: CacheManager, analyzer: CategoryAnalyzer, max_words: usize) -> Self {
        Self {
            cache,
            analyzer,
            max_words,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/cache/stats", get(cache_stats))
        .route("/cache/cleanup", get(cache_cleanup))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let cache_stats = state.cache.stats().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: uptime_secs(state.started_at, Utc::now()),
        cache: cache_stats,
    })
}

/// Whole seconds since `started_at`, zero if the wall clock stepped back
fn uptime_secs(started_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    (now - started_at).num_seconds().max(0) as u64
}

/// Word frequencies for a category, served from cache when fresh
async fn analyze(
    State(state): State<SharedState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let category = request
        .category
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    if category.is_empty() {
        return Err(ApiError::BadRequest("Category is required".to_string()));
    }

    let result = state
        .analyzer
        .analyze_with_cache(&state.cache, &category)
        .await?
        .ok_or_else(|| ApiError::NotFound("No pages found in category".to_string()))?;

    let top_words = top_words(result.frequencies(), state.max_words);
    Ok(Json(match result {
        CategoryResult::Cached(frequencies) => AnalyzeResponse {
            category,
            frequencies,
            top_words,
            cached: true,
            processed_pages: None,
            cache_stats: Some(state.cache.stats().await),
        },
        CategoryResult::Fresh(analysis) => AnalyzeResponse {
            category,
            frequencies: analysis.frequencies,
            top_words,
            cached: false,
            processed_pages: Some(analysis.processed_pages),
            cache_stats: None,
        },
    }))
}

async fn cache_stats(State(state): State<SharedState>) -> Json<CacheStats> {
    Json(state.cache.stats().await)
}

/// Remove expired entries, optionally with a custom age limit
async fn cache_cleanup(
    State(state): State<SharedState>,
    Query(query): Query<CleanupQuery>,
) -> Result<Json<CleanupResponse>, ApiError> {
    let max_age = query
        .max_age_hours
        .map(|hours| Duration::hours(i64::from(hours)));
    let cleaned_entries = state
        .cache
        .cleanup(max_age)
        .await
        .map_err(|e| ApiError::Internal(e.into()))?;

    Ok(Json(CleanupResponse {
        cleaned_entries,
        stats: state.cache.stats().await,
    }))
}
