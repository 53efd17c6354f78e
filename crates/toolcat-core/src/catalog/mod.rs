//! Catalog document: model, TTL cache, and integrity-enforcing loader.

mod cache;
mod loader;
mod model;

pub use cache::{CachedEntry, CatalogCache};
pub use loader::{CatalogLoader, LoadError};
pub use model::{Capability, CatalogDocument, ChangelogEntry, Download, SiteContact, Tool};
