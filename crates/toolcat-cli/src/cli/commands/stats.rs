//! `toolcat stats` – the metrics dashboard.
//!
//! Counters come from the remote aggregate when it is reachable, the mood
//! always from the local journal. Tool names come from the verified
//! catalog; slugs that fell out of the catalog are shown as-is.

use anyhow::Result;
use toolcat_core::config::SiteConfig;
use toolcat_core::metrics::{downloads_on, last_n_days, local_day_key, top_downloads, trend, MetricsStore};

use super::site::{load_site, open_store};

pub async fn run_stats(cfg: &SiteConfig) -> Result<()> {
    let (catalog, remote) = load_site(cfg).await?;
    let store = MetricsStore::new(open_store()?);
    let merged = store.merged(remote.as_ref());
    let today = local_day_key(0);

    if remote.is_none() {
        println!("(remote metrics unreachable, showing local counters)");
    }

    println!(
        "Visits today:    {}",
        merged.visits_by_date.get(&today).copied().unwrap_or(0)
    );
    println!("Downloads today: {}", downloads_on(&merged, &today));
    match merged.mood_by_date.get(&today) {
        Some(mood) => println!("Mood today:      {mood}"),
        None => println!("Mood today:      (not recorded)"),
    }

    println!();
    println!("Visits, last 7 days:");
    for bar in trend(&merged, &last_n_days(7)) {
        println!(
            "  {}  {:>4}  {}",
            &bar.day[5..],
            bar.value,
            "#".repeat(bar.level as usize)
        );
    }

    println!();
    println!("Top downloads:");
    let top = top_downloads(&merged);
    if top.is_empty() {
        println!("  (no downloads recorded yet)");
    }
    for (slug, count) in top {
        println!("  {:<24} {:>6}", catalog.name_for(&slug), count);
    }
    Ok(())
}
