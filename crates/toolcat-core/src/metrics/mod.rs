//! Usage metrics: daily-bucketed counters, the mood journal, merge with a
//! remote aggregate, and derived presentation views.
//!
//! Everything here is approximate analytics, not a system of record:
//! storage failures degrade silently and concurrent writers race with
//! last-writer-wins.

mod remote;
mod snapshot;
mod store;
mod view;

pub use remote::fetch_remote;
pub use snapshot::MetricsSnapshot;
pub use store::{MetricsStore, MoodError, METRICS_KEY, MOODS};
pub use view::{downloads_on, last_n_days, local_day_key, top_downloads, trend, TrendBar};
