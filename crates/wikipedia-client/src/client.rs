//! MediaWiki API HTTP client

use crate::error::{Result, WikipediaError};
use crate::types::{CategoryMembersResponse, ExtractsResponse};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the MediaWiki action API
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    api_url: String,
    member_limit: u32,
}

impl WikipediaClient {
    /// English Wikipedia API endpoint
    pub const DEFAULT_API_URL: &'static str = "https://en.wikipedia.org/w/api.php";
    /// Maximum category members requested per call
    pub const DEFAULT_MEMBER_LIMIT: u32 = 500;

    /// Create a client for English Wikipedia (30 second timeout)
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("WordcloudAnalyzer/0.1 (category word frequency service)")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            api_url: Self::DEFAULT_API_URL.to_string(),
            member_limit: Self::DEFAULT_MEMBER_LIMIT,
        }
    }

    /// Point the client at a different `api.php` endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_member_limit(mut self, limit: u32) -> Self {
        self.member_limit = limit;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// List article titles (namespace 0) in a category
    ///
    /// # Arguments
    /// * `category` - Category name without the `Category:` prefix
    pub async fn fetch_members(&self, category: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}?action=query&list=categorymembers&cmtitle={}&cmlimit={}&format=json",
            self.api_url,
            urlencoding::encode(&format!("Category:{}", category)),
            self.member_limit
        );

        let response: CategoryMembersResponse = self.get_json(&url).await?;
        let titles = response.article_titles();
        debug!(category, count = titles.len(), "Fetched category members");
        Ok(titles)
    }

    /// Fetch the plain-text extract of a page. Missing pages yield an empty string.
    pub async fn fetch_content(&self, title: &str) -> Result<String> {
        let url = format!(
            "{}?action=query&prop=extracts&exlimit=1&explaintext=1&titles={}&format=json",
            self.api_url,
            urlencoding::encode(title)
        );

        let response: ExtractsResponse = self.get_json(&url).await?;
        let text = response.into_text();
        debug!(title, chars = text.len(), "Fetched page content");
        Ok(text)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), url = %url, "Wikipedia API request failed");
            return Err(WikipediaError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for WikipediaClient {
    fn default() -> Self {
        Self::new()
    }
}
