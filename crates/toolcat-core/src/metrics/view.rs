//! Derived presentation views: day keys, top downloads, visit trend.

use chrono::{Duration, Local};

use super::snapshot::MetricsSnapshot;

/// Highest trend bar level; level 0 is reserved for "no visits".
const TREND_LEVELS: u64 = 8;
/// How many tools the top-downloads view keeps.
const TOP_N: usize = 5;

/// Local-calendar day key `YYYY-MM-DD`, offset in whole days from today.
/// Wall clock, not UTC: the bucket a user sees matches their day.
pub fn local_day_key(offset_days: i64) -> String {
    (Local::now().date_naive() + Duration::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}

/// The `n` local-calendar days ending today inclusive, oldest first.
pub fn last_n_days(n: i64) -> Vec<String> {
    (0..n).map(|i| local_day_key(i - (n - 1))).collect()
}

/// Total downloads recorded on `day` across all tools.
pub fn downloads_on(snapshot: &MetricsSnapshot, day: &str) -> u64 {
    snapshot
        .downloads_by_date
        .get(day)
        .map(|per_tool| per_tool.values().sum())
        .unwrap_or(0)
}

/// Top downloaded tools, descending by all-time count, at most five.
/// Exact ties keep the snapshot map's lexicographic slug order.
pub fn top_downloads(snapshot: &MetricsSnapshot) -> Vec<(String, u64)> {
    let mut items: Vec<(String, u64)> = snapshot
        .downloads_by_tool
        .iter()
        .map(|(slug, count)| (slug.clone(), *count))
        .collect();
    // Stable sort, so equal counts stay in key order.
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items.truncate(TOP_N);
    items
}

/// One bar of the visit trend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendBar {
    pub day: String,
    pub value: u64,
    pub level: u8,
}

/// Relative visit levels for the given day window.
///
/// Level 0 means no visits; otherwise `ceil(value / window_max * 8)`
/// clamped to 1..=8. This drives a sparkline-style bar height, not an
/// exact scale.
pub fn trend(snapshot: &MetricsSnapshot, days: &[String]) -> Vec<TrendBar> {
    let values: Vec<u64> = days
        .iter()
        .map(|day| snapshot.visits_by_date.get(day).copied().unwrap_or(0))
        .collect();
    let window_max = values.iter().copied().max().unwrap_or(0).max(1);

    days.iter()
        .zip(values)
        .map(|(day, value)| {
            let level = if value == 0 {
                0
            } else {
                (value * TREND_LEVELS).div_ceil(window_max).clamp(1, TREND_LEVELS) as u8
            };
            TrendBar {
                day: day.clone(),
                value,
                level,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_tools(counts: &[(&str, u64)]) -> MetricsSnapshot {
        let mut snapshot = MetricsSnapshot::default();
        for (slug, count) in counts {
            snapshot.downloads_by_tool.insert(slug.to_string(), *count);
        }
        snapshot
    }

    #[test]
    fn day_keys_are_contiguous_and_end_today() {
        let days = last_n_days(7);
        assert_eq!(days.len(), 7);
        assert_eq!(days[6], local_day_key(0));
        assert_eq!(days[0], local_day_key(-6));
        for day in &days {
            assert_eq!(day.len(), 10, "{day} should be YYYY-MM-DD");
        }
    }

    #[test]
    fn top_downloads_sorts_descending_and_truncates() {
        let snapshot = snapshot_with_tools(&[
            ("a", 1),
            ("b", 9),
            ("c", 4),
            ("d", 7),
            ("e", 2),
            ("f", 5),
        ]);
        let top = top_downloads(&snapshot);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0], ("b".to_string(), 9));
        assert_eq!(top[1], ("d".to_string(), 7));
        assert_eq!(top[4], ("e".to_string(), 2));
    }

    #[test]
    fn top_downloads_breaks_ties_by_slug_order() {
        let snapshot = snapshot_with_tools(&[("zeta", 3), ("alpha", 3), ("mid", 3)]);
        let top = top_downloads(&snapshot);
        let order: Vec<&str> = top.iter().map(|(slug, _)| slug.as_str()).collect();
        assert_eq!(order, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn top_downloads_spec_example() {
        let snapshot = snapshot_with_tools(&[("toolA", 3), ("toolB", 1)]);
        let top = top_downloads(&snapshot);
        assert_eq!(
            top,
            vec![("toolA".to_string(), 3), ("toolB".to_string(), 1)]
        );
    }

    #[test]
    fn trend_levels_scale_to_window_max() {
        let days: Vec<String> = ["d1", "d2", "d3", "d4"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut snapshot = MetricsSnapshot::default();
        snapshot.visits_by_date.insert("d2".to_string(), 1);
        snapshot.visits_by_date.insert("d3".to_string(), 4);
        snapshot.visits_by_date.insert("d4".to_string(), 8);

        let bars = trend(&snapshot, &days);
        assert_eq!(bars[0].level, 0, "no visits is level 0");
        assert_eq!(bars[1].level, 1, "ceil(1/8*8) = 1");
        assert_eq!(bars[2].level, 4, "ceil(4/8*8) = 4");
        assert_eq!(bars[3].level, 8, "window max fills the bar");
    }

    #[test]
    fn trend_of_empty_window_is_all_zero_levels() {
        let days: Vec<String> = ["d1", "d2"].iter().map(|s| s.to_string()).collect();
        let bars = trend(&MetricsSnapshot::default(), &days);
        assert!(bars.iter().all(|b| b.level == 0 && b.value == 0));
    }

    #[test]
    fn trend_single_visit_day_is_full_height() {
        let days: Vec<String> = ["d1"].iter().map(|s| s.to_string()).collect();
        let mut snapshot = MetricsSnapshot::default();
        snapshot.visits_by_date.insert("d1".to_string(), 1);
        let bars = trend(&snapshot, &days);
        assert_eq!(bars[0].level, 8);
    }

    #[test]
    fn downloads_on_sums_the_daily_map() {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.bump_download("2026-02-28", "a");
        snapshot.bump_download("2026-02-28", "a");
        snapshot.bump_download("2026-02-28", "b");
        assert_eq!(downloads_on(&snapshot, "2026-02-28"), 3);
        assert_eq!(downloads_on(&snapshot, "2026-02-27"), 0);
    }
}
