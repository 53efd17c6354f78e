use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Fallback cache-busting version used when the config does not pin one.
const FALLBACK_VERSION: &str = "20260228";

/// Digest of the currently authorized catalog document (lowercase hex
/// SHA-256 over the raw JSON text). Rotated together with the document.
const PINNED_CATALOG_HASH: &str =
    "072123497a838de74f44cdd2be2798e39e28fe14ebc00d6734b0a6d1c771235b";

/// Site configuration loaded from `~/.config/toolcat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Origin the site is served from; download links never escape it.
    pub base_url: String,
    /// Path of the catalog document under the base URL.
    #[serde(default = "default_data_path")]
    pub data_path: String,
    /// Path of the shared metrics snapshot under the base URL.
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
    /// Version token appended to document URLs for cache busting. Also
    /// qualifies the catalog cache key, so bumping it invalidates old
    /// cached entries with no migration step.
    #[serde(default = "default_asset_version")]
    pub asset_version: String,
    /// Expected digest of the catalog document.
    #[serde(default = "default_expected_hash")]
    pub expected_hash: String,
    /// Algorithm the expected digest was computed with.
    #[serde(default = "default_digest_algorithm")]
    pub digest_algorithm: String,
    /// Seconds a cached catalog entry stays servable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_data_path() -> String {
    "/data/tools.json".to_string()
}

fn default_metrics_path() -> String {
    "/data/metrics.json".to_string()
}

fn default_asset_version() -> String {
    FALLBACK_VERSION.to_string()
}

fn default_expected_hash() -> String {
    PINNED_CATALOG_HASH.to_string()
}

fn default_digest_algorithm() -> String {
    crate::digest::SHA256.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    600
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tools.example.com".to_string(),
            data_path: default_data_path(),
            metrics_path: default_metrics_path(),
            asset_version: default_asset_version(),
            expected_hash: default_expected_hash(),
            digest_algorithm: default_digest_algorithm(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl SiteConfig {
    /// Parsed site base URL; the origin all download links are scoped to.
    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("invalid base_url: {}", self.base_url))
    }

    /// Catalog document URL with the cache-busting version query.
    pub fn data_url(&self) -> String {
        versioned_url(&self.base_url, &self.data_path, &self.asset_version)
    }

    /// Metrics snapshot URL with the cache-busting version query.
    pub fn metrics_url(&self) -> String {
        versioned_url(&self.base_url, &self.metrics_path, &self.asset_version)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn versioned_url(base: &str, path: &str, version: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(version.as_bytes()).collect();
    format!("{}{}?v={}", base.trim_end_matches('/'), path, encoded)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("toolcat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SiteConfig = toml::from_str(&data)?;
    Ok(cfg)
}
