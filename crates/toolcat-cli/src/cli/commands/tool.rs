//! `toolcat tool` – one tool in detail.

use anyhow::{Context, Result};
use toolcat_core::config::SiteConfig;

use super::site::load_catalog;

pub async fn run_tool(cfg: &SiteConfig, slug: &str) -> Result<()> {
    let catalog = load_catalog(cfg).await?;
    let tool = catalog
        .tool(slug)
        .with_context(|| format!("unknown tool slug: {slug}"))?;

    println!("{} — {}", tool.name, tool.tagline);
    println!("[{}] [{}]", tool.category, tool.status);
    println!();
    println!("{}", tool.summary);

    if !tool.highlights.is_empty() {
        println!();
        println!("Highlights:");
        for item in &tool.highlights {
            println!("  - {item}");
        }
    }

    if !tool.capabilities.is_empty() {
        println!();
        println!("Capabilities:");
        for cap in &tool.capabilities {
            println!("  {}: {}", cap.title, cap.detail);
        }
    }

    if !tool.scenarios.is_empty() {
        println!();
        println!("Scenarios:");
        for item in &tool.scenarios {
            println!("  - {item}");
        }
    }

    if !tool.requirements.is_empty() {
        println!();
        println!("Requirements:");
        for item in &tool.requirements {
            println!("  - {item}");
        }
    }

    if !tool.changelog.is_empty() {
        println!();
        println!("Changelog:");
        for entry in &tool.changelog {
            println!("  {}", entry.version);
            for item in &entry.items {
                println!("    - {item}");
            }
        }
    }

    // Only http(s) repository links are shown; anything else in the data
    // is ignored.
    if let Some(repo) = tool
        .repository
        .as_deref()
        .filter(|r| r.starts_with("http://") || r.starts_with("https://"))
    {
        println!();
        println!("Repository: {repo}");
    }

    Ok(())
}
