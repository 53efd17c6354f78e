//! `toolcat mood` – record the mood for a day.

use anyhow::{bail, Result};
use toolcat_core::metrics::{local_day_key, MetricsStore, MOODS};

use super::site::open_store;

pub async fn run_mood(mood: &str, day: Option<&str>) -> Result<()> {
    let day = day
        .map(str::to_string)
        .unwrap_or_else(|| local_day_key(0));

    let store = MetricsStore::new(open_store()?);
    match store.set_mood(&day, mood) {
        Ok(_) => {
            println!("Recorded mood for {day}: {mood}");
            Ok(())
        }
        Err(e) => bail!("{e}; valid moods: {}", MOODS.join(" ")),
    }
}
