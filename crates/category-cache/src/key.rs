//! Key hashing

use sha2::{Digest, Sha256};

/// Hash a cache key into a 64-char lowercase hex identifier
pub fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// File name for the entry stored under `key`
pub fn entry_file_name(key: &str) -> String {
    format!("{}.json", hash_key(key))
}
