//! Build a metrics snapshot from nginx access logs.
//!
//! Server-side counterpart of the client counters: page requests become
//! daily visits, `/downloads/<slug>/...` hits become per-day and all-time
//! download counts. Lines that do not look like the combined log format
//! are skipped, not errors.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::download_gate::is_valid_slug;
use crate::metrics::MetricsSnapshot;

/// Request paths that count as a site visit. Query strings disqualify a
/// line, matching the exact-path counting of the original log pipeline.
const VISIT_PATHS: [&str; 5] = [
    "/",
    "/index.html",
    "/pages/tools.html",
    "/pages/tool.html",
    "/pages/downloads.html",
];

/// Snapshot plus provenance, as written to `metrics.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMetrics {
    pub generated_at: String,
    pub source: String,
    #[serde(flatten)]
    pub snapshot: MetricsSnapshot,
}

impl GeneratedMetrics {
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize generated metrics")
    }
}

/// Scans the given log files and aggregates visit and download counters.
pub fn collect(paths: &[PathBuf]) -> Result<GeneratedMetrics> {
    let mut snapshot = MetricsSnapshot::default();

    for path in paths {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        for line in BufReader::new(file).lines() {
            let Ok(line) = line else { continue };
            scan_line(&line, &mut snapshot);
        }
    }

    let source = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(GeneratedMetrics {
        generated_at: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        source,
        snapshot,
    })
}

fn scan_line(line: &str, snapshot: &mut MetricsSnapshot) {
    let Some(day) = day_from_line(line) else {
        return;
    };
    let Some(path) = request_path(line) else {
        return;
    };

    if VISIT_PATHS.contains(&path) {
        snapshot.bump_visit(&day);
    }
    if let Some(slug) = download_slug(path) {
        snapshot.bump_download(&day, &slug);
    }
}

/// `[28/Feb/2026:11:31:22 +0800]` → `2026-02-28`.
fn day_from_line(line: &str) -> Option<String> {
    let start = line.find('[')? + 1;
    let end = line[start..].find(']')? + start;
    let raw = line[start..end].split_whitespace().next()?;
    let parsed = NaiveDateTime::parse_from_str(raw, "%d/%b/%Y:%H:%M:%S").ok()?;
    Some(parsed.format("%Y-%m-%d").to_string())
}

/// Path token from the `"METHOD /path HTTP/x"` request section.
fn request_path(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let end = line[start..].find('"')? + start;
    let mut parts = line[start..end].split_whitespace();
    let method = parts.next()?;
    if method.is_empty() || !method.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    parts.next()
}

/// `/downloads/<slug>/...` anywhere in the path.
fn download_slug(path: &str) -> Option<String> {
    let idx = path.find("/downloads/")?;
    let rest = &path[idx + "/downloads/".len()..];
    let (slug, _) = rest.split_once('/')?;
    if !is_valid_slug(slug) {
        return None;
    }
    Some(slug.to_string())
}
