//! Best-effort fetch of the shared remote metrics snapshot.
//!
//! Lower trust bar than the catalog: no integrity pin, because the payload
//! only affects displayed counters, never links. Any failure degrades to
//! `None` and the caller falls back to local metrics.

use crate::transport::Transport;

use super::snapshot::MetricsSnapshot;

pub fn fetch_remote<T: Transport>(transport: &T, url: &str) -> Option<MetricsSnapshot> {
    match transport.fetch_text(url) {
        Ok(body) => Some(MetricsSnapshot::from_json_lenient(&body)),
        Err(e) => {
            tracing::debug!("remote metrics fetch failed, using local only: {}", e);
            None
        }
    }
}
