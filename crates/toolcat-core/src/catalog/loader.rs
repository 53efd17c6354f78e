//! Cache-or-network catalog retrieval with integrity enforcement.
//!
//! The cache-hit path returns immediately and revalidates in a detached
//! background thread (stale-while-revalidate); the miss path costs exactly
//! one network round-trip and never caches or parses an unverified payload.

use std::sync::Arc;
use std::time::SystemTime;
use thiserror::Error;

use crate::digest;
use crate::store::KeyValueStore;
use crate::transport::{Transport, TransportError};

use super::cache::CatalogCache;
use super::model::CatalogDocument;

/// Failure loading the catalog document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport failed or returned a non-success status. Recoverable: a
    /// later call may be served from cache or a healthy network.
    #[error("network error: {0}")]
    Network(#[from] TransportError),
    /// The fetched text does not hash to the pinned value. Callers must
    /// surface this and drop the payload; there is no silent fallback to
    /// unverified data.
    #[error("catalog integrity violation: expected digest {expected}, got {actual}")]
    Integrity { expected: String, actual: String },
    /// Verified bytes failed to parse. A deployment bug (the hash was
    /// pinned over a malformed document), not a security event.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configured digest algorithm is unavailable, so integrity cannot
    /// be checked at all.
    #[error(transparent)]
    Unsupported(#[from] digest::UnsupportedAlgorithm),
}

/// Resolves the catalog from cache or network, always hash-checked.
pub struct CatalogLoader<S, T> {
    inner: Arc<Inner<S, T>>,
}

struct Inner<S, T> {
    cache: CatalogCache<S>,
    transport: T,
    data_url: String,
    algorithm: String,
    expected_hash: String,
}

impl<S, T> CatalogLoader<S, T>
where
    S: KeyValueStore + Send + Sync + 'static,
    T: Transport + Send + Sync + 'static,
{
    pub fn new(
        cache: CatalogCache<S>,
        transport: T,
        data_url: String,
        algorithm: &str,
        expected_hash: &str,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                cache,
                transport,
                data_url,
                algorithm: algorithm.to_string(),
                expected_hash: expected_hash.to_string(),
            }),
        }
    }

    /// Single logical load operation.
    ///
    /// Cache hit: returns the cached document at once and kicks off a full
    /// fetch-and-verify in the background whose success overwrites the
    /// cache for next time; the caller never waits on it and its failures
    /// are discarded. Cache miss: one fetch-and-verify on the calling
    /// thread.
    pub fn load(&self) -> Result<CatalogDocument, LoadError> {
        if let Some(cached) = self.inner.cache.read(SystemTime::now()) {
            tracing::debug!("catalog served from cache, revalidating in background");
            self.spawn_revalidate();
            return Ok(cached);
        }
        self.inner.fetch_verified()
    }

    /// Fetch, verify, parse, and write through the cache, skipping the
    /// cache on the read side.
    pub fn fetch_verified(&self) -> Result<CatalogDocument, LoadError> {
        self.inner.fetch_verified()
    }

    fn spawn_revalidate(&self) {
        let inner = Arc::clone(&self.inner);
        std::thread::spawn(move || match inner.fetch_verified() {
            Ok(_) => tracing::debug!("background catalog revalidation ok"),
            Err(e) => tracing::debug!("background catalog revalidation failed: {}", e),
        });
    }
}

impl<S: KeyValueStore, T: Transport> Inner<S, T> {
    fn fetch_verified(&self) -> Result<CatalogDocument, LoadError> {
        let body = self.transport.fetch_text(&self.data_url)?;
        let actual = digest::digest_hex(&self.algorithm, &body)?;
        if actual != self.expected_hash {
            return Err(LoadError::Integrity {
                expected: self.expected_hash.clone(),
                actual,
            });
        }
        let data: CatalogDocument = serde_json::from_str(&body)?;
        self.cache.write(SystemTime::now(), &actual, &data);
        Ok(data)
    }
}
