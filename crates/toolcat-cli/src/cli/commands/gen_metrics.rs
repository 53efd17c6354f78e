//! `toolcat gen-metrics` – build metrics.json from nginx access logs.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use toolcat_core::access_log;

pub async fn run_gen_metrics(logs: &[PathBuf], output: &Path) -> Result<()> {
    let generated = access_log::collect(logs)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
    }
    fs::write(output, generated.to_pretty_json()?)
        .with_context(|| format!("write {}", output.display()))?;

    println!(
        "Wrote {} ({} visit days, {} tools with downloads)",
        output.display(),
        generated.snapshot.visits_by_date.len(),
        generated.snapshot.downloads_by_tool.len()
    );
    Ok(())
}
