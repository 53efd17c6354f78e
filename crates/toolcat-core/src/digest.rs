//! Catalog integrity digest.
//!
//! The digest is computed over the raw response text before any parsing,
//! so a tampered payload never reaches serde. `sha256_file` exists for the
//! pinning workflow: hash the document you are about to deploy, then put
//! that value in the config.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

const BUF_SIZE: usize = 64 * 1024;

/// The one digest algorithm this build supports.
pub const SHA256: &str = "sha256";

/// The configured digest algorithm is not available in this build.
///
/// Propagates to the caller as a load failure; integrity verification is
/// never silently skipped.
#[derive(Debug, Error)]
#[error("digest algorithm {algorithm:?} is not supported by this build")]
pub struct UnsupportedAlgorithm {
    pub algorithm: String,
}

/// Compute the digest of `text` under the named algorithm, as lowercase hex.
pub fn digest_hex(algorithm: &str, text: &str) -> Result<String, UnsupportedAlgorithm> {
    match algorithm {
        SHA256 => Ok(sha256_hex(text)),
        other => Err(UnsupportedAlgorithm {
            algorithm: other.to_string(),
        }),
    }
}

/// SHA-256 of the input bytes as lowercase hex. Deterministic, pure.
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
