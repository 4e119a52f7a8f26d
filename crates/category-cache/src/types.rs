//! Cache types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Construction-time configuration for a [`crate::CacheManager`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Directory holding entry files and the ledger
    pub cache_dir: PathBuf,
    /// Entries older than this are treated as absent
    pub expiration_hours: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("./cache"),
            expiration_hours: 24,
        }
    }
}

/// One cached record as stored on disk
///
/// `key` is the caller's original key. Lookups go through the hashed file
/// name, the stored key is only used to detect hash collisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub timestamp: DateTime<Utc>,
    pub data: T,
    pub key: String,
}

/// Aggregate usage record persisted next to the entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub created_at: DateTime<Utc>,
    pub last_cleanup: DateTime<Utc>,
    pub total_entries: u64,
    pub size_bytes: u64,
}

impl Ledger {
    /// A zero-count ledger stamped with `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            last_cleanup: now,
            total_entries: 0,
            size_bytes: 0,
        }
    }

    /// Apply signed deltas, clamping at zero if the ledger has drifted
    pub fn apply(&mut self, size_delta: i64, entries_delta: i64) {
        self.size_bytes = self.size_bytes.saturating_add_signed(size_delta);
        self.total_entries = self.total_entries.saturating_add_signed(entries_delta);
    }
}

/// Read-only view of the cache: ledger contents, configuration and
/// in-process counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub created_at: DateTime<Utc>,
    pub last_cleanup: DateTime<Utc>,
    pub total_entries: u64,
    pub size_bytes: u64,
    pub cache_dir: PathBuf,
    pub expiration_hours: u32,
    pub hits: u64,
    pub misses: u64,
    pub expired: u64,
    pub corrupt_entries: u64,
    pub key_mismatches: u64,
}
