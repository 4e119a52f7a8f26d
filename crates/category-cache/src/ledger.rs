//! Persisted aggregate usage ledger

use crate::atomic::write_atomic;
use crate::error::Result;
use crate::types::Ledger;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Fixed name of the ledger file inside the cache directory
pub const LEDGER_FILE_NAME: &str = "metadata.json";

/// Reads and writes the ledger file.
///
/// `update` and `mark_cleanup` are read-modify-write sequences with no
/// locking of their own. Callers serialize them through the manager's
/// write lock.
#[derive(Debug)]
pub(crate) struct MetadataLedger {
    path: PathBuf,
}

impl MetadataLedger {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            path: cache_dir.join(LEDGER_FILE_NAME),
        }
    }

    /// Write a zero-state ledger if none exists yet
    pub async fn ensure(&self, now: DateTime<Utc>) -> Result<()> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        debug!(path = ?self.path, "Initializing cache ledger");
        self.persist(&Ledger::new(now)).await
    }

    /// Load the ledger, falling back to a fresh zero state if it is missing
    /// or unreadable
    pub async fn read(&self, now: DateTime<Utc>) -> Ledger {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ledger::new(now),
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Failed to read cache ledger, using zero state");
                return Ledger::new(now);
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Corrupt cache ledger, using zero state");
                Ledger::new(now)
            }
        }
    }

    /// Apply size and entry-count deltas and persist
    pub async fn update(
        &self,
        size_delta: i64,
        entries_delta: i64,
        now: DateTime<Utc>,
    ) -> Result<Ledger> {
        let mut ledger = self.read(now).await;
        ledger.apply(size_delta, entries_delta);
        self.persist(&ledger).await?;
        Ok(ledger)
    }

    /// Stamp the end of a sweep. Counts were already adjusted by the
    /// sweep's removals.
    pub async fn mark_cleanup(&self, now: DateTime<Utc>) -> Result<Ledger> {
        let mut ledger = self.read(now).await;
        ledger.last_cleanup = now;
        self.persist(&ledger).await?;
        Ok(ledger)
    }

    async fn persist(&self, ledger: &Ledger) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(ledger)?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        write_atomic(&self.path, &bytes).await?;
        Ok(())
    }
}
