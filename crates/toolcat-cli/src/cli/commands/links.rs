//! `toolcat links` – resolve download links through the safety gate.
//!
//! The gate runs per render: a rejected path is shown as blocked, the raw
//! data value is never printed as a link.

use anyhow::{Context, Result};
use toolcat_core::config::SiteConfig;
use toolcat_core::download_gate;

use super::site::load_catalog;

pub async fn run_links(cfg: &SiteConfig, slug: &str) -> Result<()> {
    let catalog = load_catalog(cfg).await?;
    let tool = catalog
        .tool(slug)
        .with_context(|| format!("unknown tool slug: {slug}"))?;
    let base = cfg.base()?;

    if tool.downloads.is_empty() {
        println!("{}: no packaged releases.", tool.name);
        return Ok(());
    }

    println!(
        "{:<10} {:<10} {:<8} {:<12} {:<10} {}",
        "PLATFORM", "VERSION", "ARCH", "DATE", "SIZE", "LINK"
    );
    for download in &tool.downloads {
        let link = match download_gate::resolve_href(&download.path, &tool.slug, &base) {
            Some(href) => href,
            None => "(blocked: whitelist check failed)".to_string(),
        };
        println!(
            "{:<10} {:<10} {:<8} {:<12} {:<10} {}",
            download.platform, download.version, download.arch, download.date, download.size, link
        );
    }
    Ok(())
}
