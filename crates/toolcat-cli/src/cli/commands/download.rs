//! `toolcat download` – count one download for a known tool.
//!
//! Accepts either a slug or a full download href; an href goes through the
//! gate's slug extraction first, and only slugs present in the verified
//! catalog are counted.

use anyhow::{bail, Context, Result};
use toolcat_core::config::SiteConfig;
use toolcat_core::download_gate;
use toolcat_core::metrics::MetricsStore;

use super::site::{load_catalog, open_store};

pub async fn run_download(cfg: &SiteConfig, target: &str) -> Result<()> {
    let catalog = load_catalog(cfg).await?;

    let slug = if target.contains('/') {
        download_gate::slug_from_href(target, &cfg.base()?)
            .context("href failed the whitelist check")?
    } else {
        target.to_string()
    };

    if catalog.tool(&slug).is_none() {
        bail!("unknown tool slug: {slug}");
    }

    let store = MetricsStore::new(open_store()?);
    let snapshot = store.record_download(&slug);
    let total = snapshot.downloads_by_tool.get(&slug).copied().unwrap_or(0);
    println!("Recorded download for {} (total {total})", catalog.name_for(&slug));
    Ok(())
}
