//! Metrics snapshot schema and field-by-field normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Aggregated usage counters plus the personal mood journal.
///
/// All date keys are local-calendar days (`YYYY-MM-DD`). Sorted maps keep
/// serialization and top-N tie order stable (lexicographic by key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsSnapshot {
    pub visits_by_date: BTreeMap<String, u64>,
    pub downloads_by_date: BTreeMap<String, BTreeMap<String, u64>>,
    pub downloads_by_tool: BTreeMap<String, u64>,
    pub mood_by_date: BTreeMap<String, String>,
}

impl MetricsSnapshot {
    /// Recovers a snapshot from untrusted JSON text, field by field: a
    /// missing or malformed field degrades to empty without discarding the
    /// other fields. Never errors.
    pub fn from_json_lenient(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value_lenient(&value),
            Err(_) => Self::default(),
        }
    }

    pub fn from_value_lenient(value: &Value) -> Self {
        Self {
            visits_by_date: counter_map(value.get("visitsByDate")),
            downloads_by_date: nested_counter_map(value.get("downloadsByDate")),
            downloads_by_tool: counter_map(value.get("downloadsByTool")),
            mood_by_date: string_map(value.get("moodByDate")),
        }
    }

    /// Increment today's visit counter for `day`.
    pub fn bump_visit(&mut self, day: &str) {
        *self.visits_by_date.entry(day.to_string()).or_insert(0) += 1;
    }

    /// Increment both download counters for `day`/`slug`. The daily
    /// breakdown and the all-time total move together, always.
    pub fn bump_download(&mut self, day: &str, slug: &str) {
        *self
            .downloads_by_date
            .entry(day.to_string())
            .or_default()
            .entry(slug.to_string())
            .or_insert(0) += 1;
        *self.downloads_by_tool.entry(slug.to_string()).or_insert(0) += 1;
    }

    /// Merged view against a remote aggregate: the remote counters are
    /// authoritative (they span all clients), the mood journal is personal
    /// and always local.
    pub fn merged_with(&self, remote: &MetricsSnapshot) -> MetricsSnapshot {
        MetricsSnapshot {
            visits_by_date: remote.visits_by_date.clone(),
            downloads_by_date: remote.downloads_by_date.clone(),
            downloads_by_tool: remote.downloads_by_tool.clone(),
            mood_by_date: self.mood_by_date.clone(),
        }
    }
}

fn counter_map(value: Option<&Value>) -> BTreeMap<String, u64> {
    let Some(Value::Object(obj)) = value else {
        return BTreeMap::new();
    };
    obj.iter()
        .filter_map(|(k, v)| Some((k.clone(), v.as_u64()?)))
        .collect()
}

fn nested_counter_map(value: Option<&Value>) -> BTreeMap<String, BTreeMap<String, u64>> {
    let Some(Value::Object(obj)) = value else {
        return BTreeMap::new();
    };
    obj.iter()
        .map(|(k, v)| (k.clone(), counter_map(Some(v))))
        .collect()
}

fn string_map(value: Option<&Value>) -> BTreeMap<String, String> {
    let Some(Value::Object(obj)) = value else {
        return BTreeMap::new();
    };
    obj.iter()
        .filter_map(|(k, v)| Some((k.clone(), v.as_str()?.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_keeps_good_fields_when_one_is_malformed() {
        let raw = r#"{
            "visitsByDate": {"2026-02-28": 3},
            "downloadsByDate": "not a map",
            "downloadsByTool": {"net-probe": 7},
            "moodByDate": {"2026-02-28": "专注"}
        }"#;
        let snapshot = MetricsSnapshot::from_json_lenient(raw);
        assert_eq!(snapshot.visits_by_date.get("2026-02-28"), Some(&3));
        assert!(snapshot.downloads_by_date.is_empty());
        assert_eq!(snapshot.downloads_by_tool.get("net-probe"), Some(&7));
        assert_eq!(
            snapshot.mood_by_date.get("2026-02-28").map(String::as_str),
            Some("专注")
        );
    }

    #[test]
    fn lenient_parse_of_garbage_is_empty() {
        let snapshot = MetricsSnapshot::from_json_lenient("{broken");
        assert_eq!(snapshot, MetricsSnapshot::default());
        let snapshot = MetricsSnapshot::from_json_lenient("[1,2,3]");
        assert_eq!(snapshot, MetricsSnapshot::default());
    }

    #[test]
    fn lenient_parse_drops_non_integer_counts() {
        let raw = r#"{"visitsByDate": {"a": 1, "b": -2, "c": "three"}}"#;
        let snapshot = MetricsSnapshot::from_json_lenient(raw);
        assert_eq!(snapshot.visits_by_date.len(), 1);
        assert_eq!(snapshot.visits_by_date.get("a"), Some(&1));
    }

    #[test]
    fn serde_roundtrip_uses_camel_case() {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.bump_visit("2026-02-28");
        snapshot.bump_download("2026-02-28", "net-probe");
        let raw = serde_json::to_string(&snapshot).unwrap();
        assert!(raw.contains("visitsByDate"));
        assert!(raw.contains("downloadsByTool"));
        let back: MetricsSnapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn bump_download_keeps_daily_and_total_consistent() {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.bump_download("2026-02-27", "net-probe");
        snapshot.bump_download("2026-02-28", "net-probe");
        snapshot.bump_download("2026-02-28", "net-probe");
        let daily_sum: u64 = snapshot
            .downloads_by_date
            .values()
            .flat_map(|per_tool| per_tool.values())
            .sum();
        assert_eq!(daily_sum, 3);
        assert_eq!(snapshot.downloads_by_tool.get("net-probe"), Some(&3));
    }

    #[test]
    fn merged_with_remote_counts_and_local_mood() {
        let mut local = MetricsSnapshot::default();
        local.bump_visit("2026-02-28");
        local
            .mood_by_date
            .insert("2026-02-28".to_string(), "专注".to_string());

        let mut remote = MetricsSnapshot::default();
        remote.visits_by_date.insert("2026-02-28".to_string(), 120);
        remote.downloads_by_tool.insert("net-probe".to_string(), 40);

        let merged = local.merged_with(&remote);
        assert_eq!(merged.visits_by_date.get("2026-02-28"), Some(&120));
        assert_eq!(merged.downloads_by_tool.get("net-probe"), Some(&40));
        assert_eq!(
            merged.mood_by_date.get("2026-02-28").map(String::as_str),
            Some("专注"),
            "mood is personal and never overwritten by the remote"
        );
    }
}
