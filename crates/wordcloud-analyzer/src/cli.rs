//! Command line interface
//!
//! With no subcommand the binary runs the HTTP service. `analyze` runs one
//! category through the same cache and prints its most common words.

use crate::analyzer::{CategoryAnalyzer, CategoryResult};
use crate::error::{AnalyzerError, Result};
use crate::text::top_words;
use category_cache::CacheManager;
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Debug, Parser)]
#[command(name = "wordcloud-analyzer", version, about = "Word frequencies for Wikipedia categories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service (the default)
    Serve,
    /// Analyze one category and print its most common words
    Analyze {
        /// Category name without the "Category:" prefix. Several words are
        /// joined with spaces.
        #[arg(required = true, num_args = 1..)]
        category: Vec<String>,

        /// How many words to print (defaults to MAX_WORDS)
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },
}

/// Analyze `category` through `cache` and write a progress and top-words
/// report to `out`.
pub async fn run_analyze(
    analyzer: &CategoryAnalyzer,
    cache: &CacheManager,
    category: &str,
    top: usize,
    out: &mut impl Write,
) -> Result<()> {
    let category = category.trim();
    if category.is_empty() {
        return Err(AnalyzerError::Config("Category is required".to_string()));
    }

    writeln!(out, "Analyzing category: {}", category)?;
    out.flush()?;

    match analyzer.analyze_with_cache(cache, category).await? {
        Some(result) => write_report(&result, top, out)?,
        None => writeln!(out, "No pages found in category")?,
    }
    Ok(())
}

fn write_report(result: &CategoryResult, top: usize, out: &mut impl Write) -> Result<()> {
    match result {
        CategoryResult::Cached(_) => writeln!(out, "Using cached results")?,
        CategoryResult::Fresh(analysis) => {
            writeln!(out, "Found {} pages", analysis.processed_pages.len())?;
            for title in &analysis.processed_pages {
                writeln!(out, "  {}", title)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Most common words:")?;
    for entry in top_words(result.frequencies(), top) {
        writeln!(out, "{}: {}", entry.word, entry.count)?;
    }
    Ok(())
}
