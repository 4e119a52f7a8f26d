//! Category fetching and word counting

use crate::error::Result;
use crate::text::{analyze, merge, WordFrequencies};
use category_cache::CacheManager;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, warn};
use wikipedia_client::WikipediaClient;

/// Result of analyzing every article in a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAnalysis {
    pub frequencies: WordFrequencies,
    pub processed_pages: Vec<String>,
}

/// Where a category's word counts came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryResult {
    Cached(WordFrequencies),
    Fresh(CategoryAnalysis),
}

impl CategoryResult {
    pub fn frequencies(&self) -> &WordFrequencies {
        match self {
            CategoryResult::Cached(frequencies) => frequencies,
            CategoryResult::Fresh(analysis) => &analysis.frequencies,
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, CategoryResult::Cached(_))
    }
}

/// Fetches category articles and merges their word counts
pub struct CategoryAnalyzer {
    client: WikipediaClient,
    min_word_length: usize,
    fetch_concurrency: usize,
}

impl CategoryAnalyzer {
    pub fn new(client: WikipediaClient, min_word_length: usize, fetch_concurrency: usize) -> Self {
        Self {
            client,
            min_word_length,
            fetch_concurrency: fetch_concurrency.max(1),
        }
    }

    /// Analyze all articles in `category`. Returns `None` if the category
    /// has no articles.
    pub async fn analyze_category(&self, category: &str) -> Result<Option<CategoryAnalysis>> {
        let pages = self.client.fetch_members(category).await?;
        if pages.is_empty() {
            return Ok(None);
        }

        info!(category, pages = pages.len(), "Analyzing category");

        let counts: Vec<WordFrequencies> = stream::iter(pages.clone())
            .map(|title| async move {
                let text = self.client.fetch_content(&title).await?;
                debug!(title = %title, "Analyzed page");
                Ok::<_, wikipedia_client::WikipediaError>(analyze(&text, self.min_word_length))
            })
            .buffered(self.fetch_concurrency)
            .try_collect()
            .await?;

        let mut frequencies = WordFrequencies::new();
        for page_counts in counts {
            merge(&mut frequencies, page_counts);
        }

        Ok(Some(CategoryAnalysis {
            frequencies,
            processed_pages: pages,
        }))
    }

    /// Serve `category` from `cache` when fresh, otherwise analyze it and
    /// store the counts. Cache failures are logged and never fail the call.
    pub async fn analyze_with_cache(
        &self,
        cache: &CacheManager,
        category: &str,
    ) -> Result<Option<CategoryResult>> {
        match cache.get_as::<WordFrequencies>(category).await {
            Ok(Some(frequencies)) => {
                info!(category, "Serving cached analysis");
                return Ok(Some(CategoryResult::Cached(frequencies)));
            }
            Ok(None) => {}
            Err(e) => warn!(category, error = %e, "Cache lookup failed, fetching fresh"),
        }

        let Some(analysis) = self.analyze_category(category).await? else {
            return Ok(None);
        };

        // A failed write only costs a refetch next time
        if let Err(e) = cache.set(category, &analysis.frequencies).await {
            warn!(category, error = %e, "Failed to cache analysis");
        }

        Ok(Some(CategoryResult::Fresh(analysis)))
    }
}
