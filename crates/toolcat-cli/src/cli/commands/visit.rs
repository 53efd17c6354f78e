//! `toolcat visit` – count one site visit for today.

use anyhow::Result;
use toolcat_core::metrics::{local_day_key, MetricsStore};

use super::site::open_store;

pub async fn run_visit() -> Result<()> {
    let store = MetricsStore::new(open_store()?);
    let snapshot = store.record_visit();
    let today = local_day_key(0);
    let count = snapshot.visits_by_date.get(&today).copied().unwrap_or(0);
    println!("Visits today: {count}");
    Ok(())
}
