//! Checksum command: compute SHA-256 of a document for hash pinning.

use anyhow::Result;
use std::path::Path;
use toolcat_core::digest;

/// Compute and print SHA-256 of the given file, e.g. the catalog JSON
/// about to be deployed.
pub async fn run_checksum(path: &Path) -> Result<()> {
    let digest = digest::sha256_file(path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
