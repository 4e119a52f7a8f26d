//! Data types for MediaWiki API responses

use serde::Deserialize;
use std::collections::BTreeMap;

/// Response from `list=categorymembers`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMembersResponse {
    pub query: Option<CategoryMembersQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMembersQuery {
    #[serde(default)]
    pub categorymembers: Vec<CategoryMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMember {
    pub pageid: Option<u64>,
    /// Namespace; 0 is the article namespace
    pub ns: i64,
    pub title: String,
}

/// Response from `prop=extracts`
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractsResponse {
    pub query: Option<ExtractsQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractsQuery {
    /// Keyed by page id (negative ids for missing pages)
    #[serde(default)]
    pub pages: BTreeMap<String, ExtractPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractPage {
    pub pageid: Option<u64>,
    pub title: Option<String>,
    pub extract: Option<String>,
}

impl CategoryMembersResponse {
    /// Titles of members in the article namespace
    pub fn article_titles(self) -> Vec<String> {
        self.query
            .map(|q| q.categorymembers)
            .unwrap_or_default()
            .into_iter()
            .filter(|m| m.ns == 0)
            .map(|m| m.title)
            .collect()
    }
}

impl ExtractsResponse {
    /// Extract of the first returned page, empty if there is none
    pub fn into_text(self) -> String {
        self.query
            .and_then(|q| q.pages.into_values().next())
            .and_then(|p| p.extract)
            .unwrap_or_default()
    }
}
