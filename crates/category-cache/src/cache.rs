//! File-per-entry JSON cache with a persisted ledger

use crate::atomic::{file_size, write_atomic};
use crate::clock::{Clock, SystemClock};
use crate::codec::{decode_entry, encode_entry};
use crate::error::Result;
use crate::key::entry_file_name;
use crate::ledger::{MetadataLedger, LEDGER_FILE_NAME};
use crate::types::{CacheConfig, CacheEntry, CacheStats};
use chrono::{DateTime, Duration, Utc};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Outcome of checking a single entry file for expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Eviction {
    Removed,
    Fresh,
    Missing,
    Unreadable,
}

/// A disk-backed cache of JSON payloads keyed by string
pub struct CacheManager {
    config: CacheConfig,
    /// Configured expiration window
    window: Duration,
    ledger: MetadataLedger,
    clock: Arc<dyn Clock>,
    /// Held across every file mutation and the matching ledger update
    write_lock: Mutex<()>,
    hits: AtomicU64,
    misses: AtomicU64,
    expired: AtomicU64,
    corrupt_entries: AtomicU64,
    key_mismatches: AtomicU64,
}

impl CacheManager {
    /// Create a cache manager using wall-clock time
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a cache manager with an explicit time source
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            window: Duration::hours(i64::from(config.expiration_hours)),
            ledger: MetadataLedger::new(&config.cache_dir),
            config,
            clock,
            write_lock: Mutex::new(()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expired: AtomicU64::new(0),
            corrupt_entries: AtomicU64::new(0),
            key_mismatches: AtomicU64::new(0),
        }
    }

    /// Ensure the cache directory and ledger exist
    pub async fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.config.cache_dir).await?;
        let _guard = self.write_lock.lock().await;
        self.ledger.ensure(self.clock.now()).await?;
        info!(
            cache_dir = ?self.config.cache_dir,
            expiration_hours = self.config.expiration_hours,
            "Cache initialized"
        );
        Ok(())
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Path of the file that stores `key`
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.config.cache_dir.join(entry_file_name(key))
    }

    /// Get a payload as raw JSON
    pub async fn get(&self, key: &str) -> Result<Option<Value>> {
        self.get_as(key).await
    }

    /// Get a payload decoded as `T`.
    ///
    /// Absent, corrupt, mismatched and expired entries are all misses.
    /// Expired entries are removed as a side effect.
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.entry_path(key);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(key = %key, error = %e, "Failed to read cache entry");
                }
                return Ok(self.miss());
            }
        };

        let entry: CacheEntry<T> = match decode_entry(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                self.corrupt_entries.fetch_add(1, Ordering::Relaxed);
                warn!(key = %key, path = ?path, error = %e, "Corrupt cache entry, treating as miss");
                return Ok(self.miss());
            }
        };

        if entry.key != key {
            self.key_mismatches.fetch_add(1, Ordering::Relaxed);
            warn!(key = %key, stored_key = %entry.key, "Cache key hash collision, treating as miss");
            return Ok(self.miss());
        }

        if is_expired(entry.timestamp, self.clock.now(), self.window) {
            self.expired.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, timestamp = %entry.timestamp, "Cache entry expired");
            self.evict_if_expired(&path, self.window).await?;
            return Ok(self.miss());
        }

        self.hits.fetch_add(1, Ordering::Relaxed);
        debug!(key = %key, "Cache hit");
        Ok(Some(entry.data))
    }

    /// Store a payload, replacing any existing entry for `key`
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, payload: &T) -> Result<()> {
        let path = self.entry_path(key);
        let _guard = self.write_lock.lock().await;

        let now = self.clock.now();
        let bytes = encode_entry(&CacheEntry {
            timestamp: now,
            data: payload,
            key: key.to_string(),
        })?;

        fs::create_dir_all(&self.config.cache_dir).await?;
        let old_size = file_size(&path).await?;
        write_atomic(&path, &bytes).await?;

        let new_size = bytes.len() as i64;
        let (size_delta, entries_delta) = match old_size {
            Some(old) => (new_size - old as i64, 0),
            None => (new_size, 1),
        };
        self.ledger.update(size_delta, entries_delta, now).await?;

        debug!(key = %key, size = new_size, replaced = old_size.is_some(), "Cached entry");
        Ok(())
    }

    /// Remove the entry for `key`. Returns whether anything was removed.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let path = self.entry_path(key);
        let _guard = self.write_lock.lock().await;
        let removed = self.remove_locked(&path).await?;
        if removed {
            debug!(key = %key, "Deleted cache entry");
        }
        Ok(removed)
    }

    /// Scan the whole directory and remove entries older than `max_age`
    /// (the configured window when `None`). Unreadable entries are skipped.
    /// Temp files left behind by an interrupted write are removed too.
    /// Returns the number of entries removed.
    pub async fn cleanup(&self, max_age: Option<Duration>) -> Result<usize> {
        let max_age = max_age.unwrap_or(self.window);
        fs::create_dir_all(&self.config.cache_dir).await?;

        let mut cleaned = 0;
        let mut skipped = 0;
        let mut stale_temps = 0;
        let mut dir = fs::read_dir(&self.config.cache_dir).await?;
        while let Some(dirent) = dir.next_entry().await? {
            let path = dirent.path();
            if !dirent.file_type().await?.is_file() {
                continue;
            }
            if is_temp_file(&path) {
                if self.remove_stale_temp(&path).await {
                    stale_temps += 1;
                }
                continue;
            }
            if !is_entry_file(&path) {
                continue;
            }
            match self.evict_if_expired(&path, max_age).await? {
                Eviction::Removed => cleaned += 1,
                Eviction::Unreadable => skipped += 1,
                Eviction::Fresh | Eviction::Missing => {}
            }
        }

        {
            let _guard = self.write_lock.lock().await;
            self.ledger.mark_cleanup(self.clock.now()).await?;
        }

        info!(
            cleaned,
            skipped,
            stale_temps,
            max_age_secs = max_age.num_seconds(),
            "Cache cleanup finished"
        );
        Ok(cleaned)
    }

    /// Ledger contents combined with configuration and counters
    pub async fn stats(&self) -> CacheStats {
        let ledger = self.ledger.read(self.clock.now()).await;
        CacheStats {
            created_at: ledger.created_at,
            last_cleanup: ledger.last_cleanup,
            total_entries: ledger.total_entries,
            size_bytes: ledger.size_bytes,
            cache_dir: self.config.cache_dir.clone(),
            expiration_hours: self.config.expiration_hours,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired: self.expired.load(Ordering::Relaxed),
            corrupt_entries: self.corrupt_entries.load(Ordering::Relaxed),
            key_mismatches: self.key_mismatches.load(Ordering::Relaxed),
        }
    }

    fn miss<T>(&self) -> Option<T> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Re-read the entry under the write lock and remove it if it is older
    /// than `max_age`. A concurrent `set` that landed first wins.
    async fn evict_if_expired(&self, path: &Path, max_age: Duration) -> Result<Eviction> {
        let _guard = self.write_lock.lock().await;

        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Eviction::Missing),
            Err(e) => {
                warn!(path = ?path, error = %e, "Failed to read cache entry during eviction");
                return Ok(Eviction::Unreadable);
            }
        };

        let entry: CacheEntry<IgnoredAny> = match decode_entry(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                self.corrupt_entries.fetch_add(1, Ordering::Relaxed);
                warn!(path = ?path, error = %e, "Skipping corrupt cache entry");
                return Ok(Eviction::Unreadable);
            }
        };

        if !is_expired(entry.timestamp, self.clock.now(), max_age) {
            return Ok(Eviction::Fresh);
        }

        if self.remove_locked(path).await? {
            debug!(key = %entry.key, "Evicted expired cache entry");
            Ok(Eviction::Removed)
        } else {
            Ok(Eviction::Missing)
        }
    }

    /// Remove a leftover temp file. Every temp write happens under
    /// `write_lock`, so one seen while holding it belongs to no live write.
    async fn remove_stale_temp(&self, path: &Path) -> bool {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(path).await {
            Ok(()) => {
                debug!(path = ?path, "Removed stale temp file");
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                warn!(path = ?path, error = %e, "Failed to remove stale temp file");
                false
            }
        }
    }

    /// Remove an entry file and account for it. Caller holds `write_lock`.
    async fn remove_locked(&self, path: &Path) -> Result<bool> {
        let Some(size) = file_size(path).await? else {
            return Ok(false);
        };

        match fs::remove_file(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        }

        self.ledger.update(-(size as i64), -1, self.clock.now()).await?;
        Ok(true)
    }
}

fn is_expired(timestamp: DateTime<Utc>, now: DateTime<Utc>, max_age: Duration) -> bool {
    now.signed_duration_since(timestamp) > max_age
}

/// Entry files are `*.json`, excluding the ledger
fn is_entry_file(path: &Path) -> bool {
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let is_ledger = path.file_name().is_some_and(|name| name == LEDGER_FILE_NAME);
    is_json && !is_ledger
}

/// Sibling files written before an atomic rename, `<name>.tmp`
fn is_temp_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "tmp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::key::hash_key;
    use crate::types::Ledger;
    use serde_json::json;
    use std::collections::BTreeMap;
    use tempfile::{tempdir, TempDir};

    fn create_test_cache(expiration_hours: u32) -> (TempDir, Arc<ManualClock>, CacheManager) {
        let dir = tempdir().unwrap();
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let config = CacheConfig {
            cache_dir: dir.path().join("cache"),
            expiration_hours,
        };
        let cache = CacheManager::with_clock(config, clock.clone());
        (dir, clock, cache)
    }

    fn on_disk(cache: &CacheManager) -> (u64, u64) {
        let mut entries = 0;
        let mut size = 0;
        for dirent in std::fs::read_dir(&cache.config().cache_dir).unwrap() {
            let path = dirent.unwrap().path();
            if is_entry_file(&path) {
                entries += 1;
                size += std::fs::metadata(&path).unwrap().len();
            }
        }
        (entries, size)
    }

    #[tokio::test]
    async fn test_init_creates_dir_and_ledger() {
        let (_dir, clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();

        let ledger_path = cache.config().cache_dir.join(LEDGER_FILE_NAME);
        let raw = std::fs::read(&ledger_path).unwrap();
        let ledger: Ledger = serde_json::from_slice(&raw).unwrap();
        assert_eq!(ledger, Ledger::new(clock.now()));
    }

    #[tokio::test]
    async fn test_large_language_models_scenario() {
        let (_dir, clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();

        let payload = json!({"model": 3, "neural": 5});
        cache.set("Large language models", &payload).await.unwrap();
        assert_eq!(cache.stats().await.total_entries, 1);
        assert_eq!(cache.get("Large language models").await.unwrap(), Some(payload));

        clock.advance(Duration::hours(25));
        assert_eq!(cache.get("Large language models").await.unwrap(), None);

        let stats = cache.stats().await;
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.size_bytes, 0);
        assert_eq!(stats.expired, 1);
        assert!(!cache.entry_path("Large language models").exists());
    }

    #[tokio::test]
    async fn test_get_absent_is_miss() {
        let (_dir, _clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();

        assert_eq!(cache.get("nothing here").await.unwrap(), None);
        assert_eq!(cache.stats().await.misses, 1);
    }

    #[tokio::test]
    async fn test_get_as_typed_payload() {
        let (_dir, _clock, cache) = create_test_cache(24);
        let mut counts = BTreeMap::new();
        counts.insert("neural".to_string(), 5u64);
        counts.insert("model".to_string(), 3u64);

        cache.set("Physics", &counts).await.unwrap();
        let cached: Option<BTreeMap<String, u64>> = cache.get_as("Physics").await.unwrap();
        assert_eq!(cached, Some(counts));
    }

    #[tokio::test]
    async fn test_expiry_boundary() {
        let (_dir, clock, cache) = create_test_cache(24);
        let start = clock.now();
        cache.set("k", &json!(1)).await.unwrap();

        clock.set(start + Duration::hours(24) - Duration::seconds(1));
        assert_eq!(cache.get("k").await.unwrap(), Some(json!(1)));

        clock.set(start + Duration::hours(24));
        assert_eq!(cache.get("k").await.unwrap(), Some(json!(1)));

        clock.set(start + Duration::hours(24) + Duration::seconds(1));
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces_entry_and_timestamp() {
        let (_dir, clock, cache) = create_test_cache(24);
        cache.set("k", &json!({"a": 1})).await.unwrap();

        clock.advance(Duration::hours(20));
        cache
            .set("k", &json!({"a": 1, "b": 2, "c": 3}))
            .await
            .unwrap();

        // Old write time would have expired by now, the replacement has not
        clock.advance(Duration::hours(10));
        assert_eq!(
            cache.get("k").await.unwrap(),
            Some(json!({"a": 1, "b": 2, "c": 3}))
        );

        let stats = cache.stats().await;
        let (entries, size) = on_disk(&cache);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(entries, 1);
        assert_eq!(stats.size_bytes, size);
    }

    #[tokio::test]
    async fn test_delete() {
        let (_dir, _clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();
        cache.set("k", &json!("v")).await.unwrap();

        assert!(cache.delete("k").await.unwrap());
        assert_eq!(cache.get("k").await.unwrap(), None);

        let stats = cache.stats().await;
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.size_bytes, 0);
    }

    #[tokio::test]
    async fn test_delete_absent_leaves_ledger_unchanged() {
        let (_dir, _clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();
        cache.set("present", &json!([1, 2, 3])).await.unwrap();
        let before = cache.stats().await;

        assert!(!cache.delete("absent").await.unwrap());

        let after = cache.stats().await;
        assert_eq!(after.total_entries, before.total_entries);
        assert_eq!(after.size_bytes, before.size_bytes);
    }

    #[tokio::test]
    async fn test_ledger_matches_disk_after_mixed_ops() {
        let (_dir, _clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();

        cache.set("a", &json!({"x": 1})).await.unwrap();
        cache.set("b", &json!({"y": 22, "z": 333})).await.unwrap();
        cache.set("a", &json!({"x": 1, "w": 4444})).await.unwrap();
        cache.delete("b").await.unwrap();
        cache.set("c", &json!("payload")).await.unwrap();
        cache.delete("missing").await.unwrap();

        let stats = cache.stats().await;
        let (entries, size) = on_disk(&cache);
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.total_entries, entries);
        assert_eq!(stats.size_bytes, size);
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_soft_miss() {
        let (_dir, _clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();
        std::fs::write(cache.entry_path("broken"), b"{\"timestamp\": 12").unwrap();

        assert_eq!(cache.get("broken").await.unwrap(), None);

        let stats = cache.stats().await;
        assert_eq!(stats.corrupt_entries, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_key_mismatch_is_miss() {
        let (_dir, clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();

        let forged = CacheEntry {
            timestamp: clock.now(),
            data: json!({"word": 1}),
            key: "some other key".to_string(),
        };
        std::fs::write(
            cache.entry_path("Physics"),
            serde_json::to_vec(&forged).unwrap(),
        )
        .unwrap();

        assert_eq!(cache.get("Physics").await.unwrap(), None);
        assert_eq!(cache.stats().await.key_mismatches, 1);
    }

    #[tokio::test]
    async fn test_cleanup_empty_cache() {
        let (_dir, clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();
        clock.advance(Duration::minutes(3));

        assert_eq!(cache.cleanup(None).await.unwrap(), 0);
        assert_eq!(cache.stats().await.last_cleanup, clock.now());
    }

    #[tokio::test]
    async fn test_cleanup_without_init() {
        let (_dir, _clock, cache) = create_test_cache(24);
        assert_eq!(cache.cleanup(None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_cleanup_removes_only_expired() {
        let (_dir, clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();

        cache.set("old-1", &json!(1)).await.unwrap();
        cache.set("old-2", &json!(2)).await.unwrap();
        clock.advance(Duration::hours(20));
        cache.set("new", &json!(3)).await.unwrap();
        clock.advance(Duration::hours(5));

        assert_eq!(cache.cleanup(None).await.unwrap(), 2);
        assert_eq!(cache.get("new").await.unwrap(), Some(json!(3)));
        assert!(!cache.entry_path("old-1").exists());
        assert!(!cache.entry_path("old-2").exists());

        let stats = cache.stats().await;
        let (entries, size) = on_disk(&cache);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(entries, 1);
        assert_eq!(stats.size_bytes, size);
    }

    #[tokio::test]
    async fn test_cleanup_with_max_age_override() {
        let (_dir, clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();
        cache.set("a", &json!(1)).await.unwrap();
        clock.advance(Duration::hours(2));

        assert_eq!(cache.cleanup(Some(Duration::hours(3))).await.unwrap(), 0);
        assert_eq!(cache.cleanup(Some(Duration::hours(1))).await.unwrap(), 1);
        assert_eq!(cache.stats().await.total_entries, 0);
    }

    #[tokio::test]
    async fn test_cleanup_skips_corrupt_and_foreign_files() {
        let (_dir, clock, cache) = create_test_cache(1);
        cache.init().await.unwrap();
        cache.set("real", &json!(1)).await.unwrap();

        let dir = &cache.config().cache_dir;
        std::fs::write(dir.join(format!("{}.json", hash_key("junk"))), b"garbage").unwrap();
        std::fs::write(dir.join("notes.txt"), b"not a cache entry").unwrap();
        std::fs::create_dir(dir.join("nested.json")).unwrap();

        clock.advance(Duration::hours(2));
        assert_eq!(cache.cleanup(None).await.unwrap(), 1);

        assert!(dir.join("notes.txt").exists());
        assert!(dir.join(LEDGER_FILE_NAME).exists());
        assert_eq!(cache.stats().await.corrupt_entries, 1);
        assert_eq!(cache.stats().await.total_entries, 0);
    }

    #[tokio::test]
    async fn test_cleanup_removes_stale_temp_files() {
        let (_dir, _clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();
        cache.set("real", &json!({"atom": 1})).await.unwrap();
        let before = cache.stats().await;

        let dir = &cache.config().cache_dir;
        let entry_tmp = dir.join(format!("{}.json.tmp", hash_key("crashed")));
        let ledger_tmp = dir.join(format!("{}.tmp", LEDGER_FILE_NAME));
        std::fs::write(&entry_tmp, b"{\"timestamp\": ").unwrap();
        std::fs::write(&ledger_tmp, b"{}").unwrap();

        // Nothing is expired, only the leftovers go
        assert_eq!(cache.cleanup(None).await.unwrap(), 0);
        assert!(!entry_tmp.exists());
        assert!(!ledger_tmp.exists());
        assert!(cache.entry_path("real").exists());

        let after = cache.stats().await;
        assert_eq!(after.total_entries, before.total_entries);
        assert_eq!(after.size_bytes, before.size_bytes);
        assert_eq!(on_disk(&cache), (1, after.size_bytes));
    }

    #[tokio::test]
    async fn test_expired_eviction_spares_fresh_rewrite() {
        let (_dir, clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();
        cache.set("k", &json!("old")).await.unwrap();
        let path = cache.entry_path("k");

        // A reader saw the expired entry, then a writer replaced it before
        // the eviction took the lock
        clock.advance(Duration::hours(25));
        cache.set("k", &json!("new")).await.unwrap();
        assert_eq!(
            cache.evict_if_expired(&path, cache.window).await.unwrap(),
            Eviction::Fresh
        );

        assert_eq!(cache.get("k").await.unwrap(), Some(json!("new")));
        let stats = cache.stats().await;
        assert_eq!(stats.total_entries, 1);
        assert_eq!(on_disk(&cache), (1, stats.size_bytes));
    }

    #[tokio::test]
    async fn test_rewrite_after_expiry_survives_cleanup() {
        let (_dir, clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();
        cache.set("k", &json!({"v": 1})).await.unwrap();

        clock.advance(Duration::hours(25));
        cache.set("k", &json!({"v": 2})).await.unwrap();

        assert_eq!(cache.cleanup(None).await.unwrap(), 0);
        assert_eq!(cache.get("k").await.unwrap(), Some(json!({"v": 2})));

        let stats = cache.stats().await;
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.expired, 0);
        assert_eq!(on_disk(&cache), (1, stats.size_bytes));
    }

    #[tokio::test]
    async fn test_ledger_recreated_when_missing() {
        let (_dir, _clock, cache) = create_test_cache(24);
        cache.init().await.unwrap();
        std::fs::remove_file(cache.config().cache_dir.join(LEDGER_FILE_NAME)).unwrap();

        let stats = cache.stats().await;
        assert_eq!(stats.total_entries, 0);

        cache.set("k", &json!(1)).await.unwrap();
        assert_eq!(cache.stats().await.total_entries, 1);
    }

    #[tokio::test]
    async fn test_write_failure_is_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();
        let cache = CacheManager::new(CacheConfig {
            cache_dir: blocker,
            expiration_hours: 24,
        });

        assert!(cache.set("k", &json!(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_stats_reports_configuration() {
        let (_dir, _clock, cache) = create_test_cache(6);
        let stats = cache.stats().await;
        assert_eq!(stats.expiration_hours, 6);
        assert_eq!(stats.cache_dir, cache.config().cache_dir);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_is_entry_file() {
        assert!(is_entry_file(Path::new("/c/abc.json")));
        assert!(!is_entry_file(Path::new("/c/metadata.json")));
        assert!(!is_entry_file(Path::new("/c/abc.json.tmp")));
        assert!(!is_entry_file(Path::new("/c/readme")));
    }

    #[test]
    fn test_is_temp_file() {
        assert!(is_temp_file(Path::new("/c/abc.json.tmp")));
        assert!(is_temp_file(Path::new("/c/metadata.json.tmp")));
        assert!(!is_temp_file(Path::new("/c/abc.json")));
        assert!(!is_temp_file(Path::new("/c/tmp")));
    }
}
