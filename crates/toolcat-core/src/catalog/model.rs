//! Catalog document model.
//!
//! Deserialized only after the raw text passed integrity verification.
//! Sequence and descriptive fields default to empty so a sparse tool entry
//! is not a parse failure; only `slug` and `name` are required.

use serde::{Deserialize, Serialize};

/// The remote catalog payload: the tool list plus site contact data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub site: SiteContact,
}

impl CatalogDocument {
    /// Tool by exact slug match.
    pub fn tool(&self, slug: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.slug == slug)
    }

    /// Display name for a slug; falls back to the slug itself for tools
    /// that are no longer in the catalog but still have counters.
    pub fn name_for<'a>(&'a self, slug: &'a str) -> &'a str {
        self.tool(slug).map(|t| t.name.as_str()).unwrap_or(slug)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContact {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub wechat: String,
    #[serde(default)]
    pub email: String,
}

/// One catalog entry. `slug` is the URL-safe identifier everything else
/// keys off: detail pages, download namespaces, metrics counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub scenarios: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub downloads: Vec<Download>,
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Capability {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangelogEntry {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One downloadable release. `path` is data-supplied and goes through the
/// download gate before it may be rendered as a link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Download {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let json = r#"{
            "tools": [
                {
                    "slug": "network-ai-ops",
                    "name": "Network AI Ops",
                    "tagline": "ops copilot",
                    "category": "network",
                    "status": "stable",
                    "highlights": ["fast"],
                    "capabilities": [{"title": "probe", "detail": "runs probes"}],
                    "downloads": [
                        {
                            "platform": "Windows",
                            "version": "1.2.0",
                            "arch": "x64",
                            "date": "2026-02-20",
                            "size": "48MB",
                            "filename": "app-1.2.0.zip",
                            "path": "/downloads/network-ai-ops/app-1.2.0.zip"
                        }
                    ],
                    "changelog": [{"version": "1.2.0", "items": ["initial"]}],
                    "repository": "https://github.com/example/network-ai-ops"
                }
            ],
            "site": {"author": "ops", "wechat": "ops-wx", "email": "ops@example.com"}
        }"#;
        let doc: CatalogDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.tools.len(), 1);
        let tool = doc.tool("network-ai-ops").unwrap();
        assert_eq!(tool.name, "Network AI Ops");
        assert_eq!(tool.downloads[0].filename, "app-1.2.0.zip");
        assert_eq!(doc.site.email, "ops@example.com");
    }

    #[test]
    fn sparse_tool_defaults_to_empty_lists() {
        let json = r#"{"tools": [{"slug": "x", "name": "X"}], "site": {}}"#;
        let doc: CatalogDocument = serde_json::from_str(json).unwrap();
        let tool = doc.tool("x").unwrap();
        assert!(tool.downloads.is_empty());
        assert!(tool.changelog.is_empty());
        assert!(tool.repository.is_none());
    }

    #[test]
    fn name_for_unknown_slug_falls_back_to_slug() {
        let doc: CatalogDocument = serde_json::from_str(r#"{"tools": [], "site": {}}"#).unwrap();
        assert_eq!(doc.name_for("gone-tool"), "gone-tool");
    }
}
