//! Disk-backed JSON cache with time-based expiry
//!
//! Each entry lives in its own file, named by a hash of the caller's key,
//! inside a single cache directory. A `metadata.json` ledger in the same
//! directory tracks the number of live entries and their total size on disk.
//!
//! # Example
//!
//! ```no_run
//! use category_cache::{CacheConfig, CacheManager};
//! use std::collections::BTreeMap;
//!
//! # async fn example() -> category_cache::Result<()> {
//! let cache = CacheManager::new(CacheConfig::default());
//! cache.init().await?;
//!
//! let mut counts = BTreeMap::new();
//! counts.insert("model".to_string(), 3u64);
//! cache.set("Large language models", &counts).await?;
//!
//! let cached: Option<BTreeMap<String, u64>> = cache.get_as("Large language models").await?;
//! assert_eq!(cached, Some(counts));
//!
//! let cleaned = cache.cleanup(None).await?;
//! println!("{} expired entries removed", cleaned);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Every mutation of the directory and the ledger runs under one async write
//! lock owned by the [`CacheManager`], so a single instance keeps its ledger
//! exact even when many tasks share it. Two processes (or two managers)
//! pointed at the same directory are not coordinated and may lose ledger
//! updates.

mod atomic;
mod cache;
mod clock;
mod codec;
mod error;
mod key;
mod ledger;
mod types;

pub use cache::CacheManager;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CacheError, Result};
pub use key::{entry_file_name, hash_key};
pub use ledger::LEDGER_FILE_NAME;
pub use types::{CacheConfig, CacheEntry, CacheStats, Ledger};
