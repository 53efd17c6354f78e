//! Local metrics store: read-modify-write over the key-value store.
//!
//! Every operation reads the stored snapshot, mutates it, writes it back,
//! and returns the updated snapshot. A failed write only loses the update
//! for the next run; the returned snapshot is still correct for the
//! current render.

use thiserror::Error;

use crate::store::KeyValueStore;

use super::snapshot::MetricsSnapshot;
use super::view::local_day_key;

/// Storage key for the local snapshot. Fixed, not version-qualified:
/// counters survive deployments.
pub const METRICS_KEY: &str = "toolcat-metrics:v1";

/// The closed set of mood labels a day can carry.
pub const MOODS: [&str; 5] = ["高效", "专注", "平稳", "疲惫", "兴奋"];

/// Mood label outside the fixed set.
#[derive(Debug, Error)]
#[error("unknown mood {mood:?}")]
pub struct MoodError {
    pub mood: String,
}

pub struct MetricsStore<S> {
    store: S,
}

impl<S: KeyValueStore> MetricsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current local snapshot. Unreadable or malformed storage degrades to
    /// empty fields, never an error.
    pub fn read(&self) -> MetricsSnapshot {
        match self.store.get(METRICS_KEY) {
            Some(raw) => MetricsSnapshot::from_json_lenient(&raw),
            None => MetricsSnapshot::default(),
        }
    }

    /// Count one visit for today.
    pub fn record_visit(&self) -> MetricsSnapshot {
        self.record_visit_on(&local_day_key(0))
    }

    /// Day-keyed variant, also used for backfill and tests.
    pub fn record_visit_on(&self, day: &str) -> MetricsSnapshot {
        let mut snapshot = self.read();
        snapshot.bump_visit(day);
        self.write(&snapshot);
        snapshot
    }

    /// Count one download of `slug` for today. No-op on an empty slug.
    pub fn record_download(&self, slug: &str) -> MetricsSnapshot {
        self.record_download_on(&local_day_key(0), slug)
    }

    pub fn record_download_on(&self, day: &str, slug: &str) -> MetricsSnapshot {
        if slug.is_empty() {
            return self.read();
        }
        let mut snapshot = self.read();
        snapshot.bump_download(day, slug);
        self.write(&snapshot);
        snapshot
    }

    /// Overwrite the mood recorded for `day`. Last write wins; labels
    /// outside [`MOODS`] are rejected.
    pub fn set_mood(&self, day: &str, mood: &str) -> Result<MetricsSnapshot, MoodError> {
        if !MOODS.contains(&mood) {
            return Err(MoodError {
                mood: mood.to_string(),
            });
        }
        let mut snapshot = self.read();
        snapshot
            .mood_by_date
            .insert(day.to_string(), mood.to_string());
        self.write(&snapshot);
        Ok(snapshot)
    }

    /// Merged view for rendering: remote counters win when a remote
    /// snapshot is available, the mood journal is always local.
    pub fn merged(&self, remote: Option<&MetricsSnapshot>) -> MetricsSnapshot {
        let local = self.read();
        match remote {
            Some(remote) => local.merged_with(remote),
            None => local,
        }
    }

    fn write(&self, snapshot: &MetricsSnapshot) {
        let raw = match serde_json::to_string(snapshot) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("serialize metrics snapshot failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(METRICS_KEY, &raw) {
            tracing::warn!("metrics write failed: {}", e);
        }
    }
}
