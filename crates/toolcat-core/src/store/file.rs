//! File-backed store: one JSON document per key under the XDG state dir.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// Persists each key as `<dir>/<sanitized-key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `~/.local/state/toolcat`.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("toolcat")?;
        Ok(Self::new(xdg_dirs.get_state_home().join("toolcat")))
    }

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys carry a version qualifier after ':'; keep filenames plain.
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("read {} failed: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            create_parent(parent)?;
        }
        fs::write(&path, value)
            .map_err(|e| StoreError::new(format!("write {}: {}", path.display(), e)))
    }
}

fn create_parent(parent: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(parent)
        .map_err(|e| StoreError::new(format!("create dir {}: {}", parent.display(), e)))
}
