//! Entry (de)serialization

use crate::types::CacheEntry;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize an entry to the bytes written on disk
pub(crate) fn encode_entry<T: Serialize>(entry: &CacheEntry<T>) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(entry)
}

/// Decode an entry. Any error here means the stored file is corrupt or holds
/// a payload of a different shape.
pub(crate) fn decode_entry<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<CacheEntry<T>> {
    serde_json::from_slice(bytes)
}
