//! Wordcloud Analyzer - word frequencies for Wikipedia categories
//!
//! This service fetches every article in a Wikipedia category, counts the
//! words in their plain-text extracts, and caches the result on disk so
//! repeated requests skip the upstream fetch. `wordcloud-analyzer analyze
//! <category>` runs a single category from the command line.

mod analyzer;
mod cli;
mod config;
mod error;
mod server;
#[cfg(test)]
mod test_support;
mod text;
mod types;

use crate::analyzer::CategoryAnalyzer;
use crate::cli::{run_analyze, Cli, Command};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::server::{start_server, ServerState, SharedState};
use category_cache::{CacheConfig, CacheManager};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};
use wikipedia_client::WikipediaClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("wordcloud_analyzer=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        // stdout carries the `analyze` report
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    };

    let config = AnalyzerConfig::from_env();
    let (cache, analyzer) = build(&config).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting Wordcloud Analyzer...");
            info!("Port: {}", config.port);
            info!("Cache dir: {:?}", config.cache_dir);
            info!("Cache expiration: {} hours", config.cache_expiration_hours);
            info!("Wikipedia API: {}", config.wiki_api_url);

            let state: SharedState = Arc::new(ServerState::new(cache, analyzer, config.max_words));

            // Start HTTP server (blocking)
            start_server(state, config.port).await?;
        }
        Command::Analyze { category, top } => {
            let top = top.unwrap_or(config.max_words);
            run_analyze(
                &analyzer,
                &cache,
                &category.join(" "),
                top,
                &mut std::io::stdout(),
            )
            .await?;
        }
    }

    Ok(())
}

/// Open the cache and build the analyzer from `config`
async fn build(config: &AnalyzerConfig) -> Result<(CacheManager, CategoryAnalyzer)> {
    let cache = CacheManager::new(CacheConfig {
        cache_dir: config.cache_dir.clone(),
        expiration_hours: config.cache_expiration_hours,
    });
    cache.init().await?;

    let client = WikipediaClient::new()
        .with_api_url(config.wiki_api_url.clone())
        .with_member_limit(config.wiki_api_limit);
    let analyzer = CategoryAnalyzer::new(client, config.min_word_length, config.fetch_concurrency);

    Ok((cache, analyzer))
}
