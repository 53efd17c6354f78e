//! Injected key-value persistence.
//!
//! The catalog cache and the metrics store are written against this trait
//! so they can be tested with an in-memory fake; production uses one JSON
//! file per key under the XDG state dir.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Error from a key-value write.
///
/// Callers treat the store as best-effort: a failed write costs performance
/// (or unsaved counters on the next run), never correctness, so this is
/// logged and swallowed rather than propagated.
#[derive(Debug, Error)]
#[error("storage unavailable: {reason}")]
pub struct StoreError {
    pub reason: String,
}

impl StoreError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// String key-value store with fail-closed reads and best-effort writes.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key is missing or the
    /// backing store cannot be read.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores the value under the key. The error is for logging only;
    /// callers must not fail on it.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
