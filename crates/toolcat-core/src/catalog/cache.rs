//! TTL- and hash-gated persistent cache for the catalog document.
//!
//! Reads fail closed: a missing key, malformed entry, expired TTL, or hash
//! that no longer matches the pinned value all degrade to a cache miss and
//! the caller re-fetches. Writes are fire-and-forget.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::store::KeyValueStore;

use super::model::CatalogDocument;

/// Cache keys are `toolcat-catalog:<asset_version>`, so a new deployment
/// invalidates old entries without migration logic.
const CATALOG_KEY_PREFIX: &str = "toolcat-catalog";

/// Cached catalog entry as serialized into the key-value store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedEntry {
    pub ts_secs: u64,
    pub hash: String,
    pub data: CatalogDocument,
}

pub struct CatalogCache<S> {
    store: S,
    key: String,
    ttl: Duration,
    expected_hash: String,
}

impl<S: KeyValueStore> CatalogCache<S> {
    pub fn new(store: S, asset_version: &str, ttl: Duration, expected_hash: &str) -> Self {
        Self {
            store,
            key: format!("{CATALOG_KEY_PREFIX}:{asset_version}"),
            ttl,
            expected_hash: expected_hash.to_string(),
        }
    }

    /// Returns the cached document iff the entry is younger than the TTL
    /// and its recorded hash equals the pinned value. Every other state is
    /// a miss, never an error.
    pub fn read(&self, now: SystemTime) -> Option<CatalogDocument> {
        let raw = self.store.get(&self.key)?;
        let entry: CachedEntry = serde_json::from_str(&raw).ok()?;
        if entry.hash.is_empty() {
            return None;
        }
        let age = epoch_secs(now).saturating_sub(entry.ts_secs);
        if age > self.ttl.as_secs() {
            return None;
        }
        if entry.hash != self.expected_hash {
            return None;
        }
        Some(entry.data)
    }

    /// Best-effort write-through. Losing the cache costs a re-fetch on the
    /// next load, so storage failures are logged and swallowed.
    pub fn write(&self, now: SystemTime, hash: &str, data: &CatalogDocument) {
        let entry = CachedEntry {
            ts_secs: epoch_secs(now),
            hash: hash.to_string(),
            data: data.clone(),
        };
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("serialize catalog cache entry failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &raw) {
            tracing::warn!("catalog cache write failed: {}", e);
        }
    }
}

fn epoch_secs(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const HASH: &str = "deadbeef";

    fn sample_doc() -> CatalogDocument {
        serde_json::from_str(r#"{"tools": [{"slug": "x", "name": "X"}], "site": {}}"#).unwrap()
    }

    fn cache_with(ttl_secs: u64) -> CatalogCache<MemoryStore> {
        CatalogCache::new(
            MemoryStore::new(),
            "20260228",
            Duration::from_secs(ttl_secs),
            HASH,
        )
    }

    #[test]
    fn roundtrip_within_ttl() {
        let cache = cache_with(600);
        let now = SystemTime::now();
        cache.write(now, HASH, &sample_doc());
        let read = cache.read(now).expect("entry should be usable");
        assert_eq!(read.tools[0].slug, "x");
    }

    #[test]
    fn expired_entry_is_a_miss() {
        let cache = cache_with(600);
        let wrote_at = SystemTime::now();
        cache.write(wrote_at, HASH, &sample_doc());
        let later = wrote_at + Duration::from_secs(601);
        assert!(cache.read(later).is_none());
    }

    #[test]
    fn hash_mismatch_is_a_miss() {
        let cache = cache_with(600);
        let now = SystemTime::now();
        cache.write(now, "0000", &sample_doc());
        assert!(cache.read(now).is_none());
    }

    #[test]
    fn malformed_entry_is_a_miss() {
        let store = MemoryStore::new();
        store.set("toolcat-catalog:20260228", "{not json").unwrap();
        let cache = CatalogCache::new(store, "20260228", Duration::from_secs(600), HASH);
        assert!(cache.read(SystemTime::now()).is_none());
    }

    #[test]
    fn missing_entry_is_a_miss() {
        let cache = cache_with(600);
        assert!(cache.read(SystemTime::now()).is_none());
    }

    #[test]
    fn version_change_invalidates_old_entries() {
        let store = MemoryStore::new();
        {
            let cache = CatalogCache::new(&store, "v1", Duration::from_secs(600), HASH);
            cache.write(SystemTime::now(), HASH, &sample_doc());
        }
        let cache = CatalogCache::new(&store, "v2", Duration::from_secs(600), HASH);
        assert!(cache.read(SystemTime::now()).is_none());
    }
}
