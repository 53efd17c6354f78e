//! Whitelist gate between data-supplied download paths and rendered links.
//!
//! This is the single authorization boundary for download hrefs: every
//! link render goes through `resolve_href`, and a rejection means the
//! caller shows a blocked affordance, never the raw path. The catalog
//! document is hash-verified as a whole, but each path is still re-checked
//! per use to bound the blast radius of a schema drift.

mod path;

pub use path::parse_download_path;

pub(crate) use path::is_valid_slug;

use url::Url;

/// Resolves a data-supplied download path to a safe absolute URL.
///
/// On top of the shape and origin checks in [`parse_download_path`], the
/// leading slug segment must equal `expected_slug` exactly, so a tool
/// entry cannot point into another tool's download namespace. `None` is
/// the "no safe link" sentinel.
pub fn resolve_href(raw: &str, expected_slug: &str, base: &Url) -> Option<String> {
    let pathname = parse_download_path(raw, base)?;
    let prefix = format!("/downloads/{expected_slug}/");
    if !pathname.starts_with(&prefix) {
        return None;
    }
    Some(format!("{}{}", base.origin().ascii_serialization(), pathname))
}

/// Extracts the tool slug from a download href, for the download tracker.
/// Anything the parser rejects yields `None`.
pub fn slug_from_href(raw: &str, base: &Url) -> Option<String> {
    let pathname = parse_download_path(raw, base)?;
    pathname
        .strip_prefix("/downloads/")?
        .split('/')
        .next()
        .map(str::to_string)
}
