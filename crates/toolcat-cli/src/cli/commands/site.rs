//! Shared wiring: store, loader, and the joined page-load fetches.

use anyhow::{Context, Result};
use toolcat_core::catalog::{CatalogCache, CatalogDocument, CatalogLoader};
use toolcat_core::config::SiteConfig;
use toolcat_core::metrics::{self, MetricsSnapshot};
use toolcat_core::store::FileStore;
use toolcat_core::transport::CurlTransport;

pub(crate) fn open_store() -> Result<FileStore> {
    FileStore::open_default().context("open state dir")
}

pub(crate) fn open_loader(cfg: &SiteConfig) -> Result<CatalogLoader<FileStore, CurlTransport>> {
    let cache = CatalogCache::new(
        open_store()?,
        &cfg.asset_version,
        cfg.cache_ttl(),
        &cfg.expected_hash,
    );
    Ok(CatalogLoader::new(
        cache,
        CurlTransport::default(),
        cfg.data_url(),
        &cfg.digest_algorithm,
        &cfg.expected_hash,
    ))
}

/// Catalog load off the async runtime (the loader blocks on curl).
pub(crate) async fn load_catalog(cfg: &SiteConfig) -> Result<CatalogDocument> {
    let loader = open_loader(cfg)?;
    let catalog = tokio::task::spawn_blocking(move || loader.load())
        .await
        .context("catalog load task failed")??;
    Ok(catalog)
}

/// The two top-level page-load fetches, issued concurrently and joined.
///
/// The remote metrics fetch is best-effort: its failure (or panic) never
/// blocks or fails the catalog path.
pub(crate) async fn load_site(
    cfg: &SiteConfig,
) -> Result<(CatalogDocument, Option<MetricsSnapshot>)> {
    let loader = open_loader(cfg)?;
    let metrics_url = cfg.metrics_url();

    let catalog_task = tokio::task::spawn_blocking(move || loader.load());
    let metrics_task = tokio::task::spawn_blocking(move || {
        let transport = CurlTransport::default();
        metrics::fetch_remote(&transport, &metrics_url)
    });

    let (catalog, remote) = tokio::join!(catalog_task, metrics_task);
    let catalog = catalog.context("catalog load task failed")??;
    let remote = remote.unwrap_or_default();
    Ok((catalog, remote))
}
