//! Rust client for the MediaWiki action API
//!
//! Covers the two calls needed to analyze a Wikipedia category: listing the
//! articles in a category and fetching each article's plain-text extract.
//!
//! # Example
//!
//! ```no_run
//! use wikipedia_client::WikipediaClient;
//!
//! # async fn example() -> Result<(), wikipedia_client::WikipediaError> {
//! let client = WikipediaClient::new();
//!
//! for title in client.fetch_members("Large language models").await? {
//!     let text = client.fetch_content(&title).await?;
//!     println!("{}: {} chars", title, text.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `action=query&list=categorymembers` - article titles in a category
//! - `action=query&prop=extracts&explaintext=1` - plain-text page content

mod client;
mod error;
mod types;

pub use client::WikipediaClient;
pub use error::{Result, WikipediaError};
pub use types::{
    CategoryMember, CategoryMembersQuery, CategoryMembersResponse, ExtractPage, ExtractsQuery,
    ExtractsResponse,
};
