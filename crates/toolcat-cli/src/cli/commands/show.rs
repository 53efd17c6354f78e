//! `toolcat show` – site contact data and the tool overview.

use anyhow::Result;
use toolcat_core::config::SiteConfig;

use super::site::load_catalog;

pub async fn run_show(cfg: &SiteConfig) -> Result<()> {
    let catalog = load_catalog(cfg).await?;

    println!("Site: {} (wechat {}, {})", catalog.site.author, catalog.site.wechat, catalog.site.email);
    println!();

    if catalog.tools.is_empty() {
        println!("No tools in the catalog.");
        return Ok(());
    }

    println!(
        "{:<20} {:<24} {:<12} {:<10} {}",
        "SLUG", "NAME", "CATEGORY", "STATUS", "DOWNLOADS"
    );
    for tool in &catalog.tools {
        println!(
            "{:<20} {:<24} {:<12} {:<10} {}",
            tool.slug,
            tool.name,
            tool.category,
            tool.status,
            tool.downloads.len()
        );
    }
    Ok(())
}
