//! Download path parsing: origin and shape checks.

use url::Url;

/// Parses a data-supplied download path against the site origin.
///
/// Returns the normalized absolute path (no origin) when it resolves to the
/// same origin, contains no parent-directory segment, and is shaped
/// `/downloads/<slug>/<file>` with `<slug>` lowercase alphanumerics and
/// hyphens and `<file>` alphanumerics, dots, underscores, hyphens, and
/// path separators. Anything else is `None`.
pub fn parse_download_path(raw: &str, origin: &Url) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let resolved = origin.join(trimmed).ok()?;
    if resolved.origin() != origin.origin() {
        return None;
    }

    let path = resolved.path();
    if path.contains("..") {
        return None;
    }

    let rest = path.strip_prefix("/downloads/")?;
    let (slug, file) = rest.split_once('/')?;
    if !is_valid_slug(slug) {
        return None;
    }
    if file.is_empty() || !file.chars().all(is_filename_char) {
        return None;
    }

    Some(path.to_string())
}

/// Lowercase alphanumerics and hyphens, non-empty.
pub(crate) fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn is_filename_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://tools.example.com/").unwrap()
    }

    #[test]
    fn accepts_well_shaped_path() {
        assert_eq!(
            parse_download_path("/downloads/network-ai-ops/app-1.2.0.zip", &origin()).as_deref(),
            Some("/downloads/network-ai-ops/app-1.2.0.zip")
        );
    }

    #[test]
    fn accepts_nested_filename_segments() {
        assert_eq!(
            parse_download_path("/downloads/net-probe/v2/probe_2.0.tar.gz", &origin()).as_deref(),
            Some("/downloads/net-probe/v2/probe_2.0.tar.gz")
        );
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(parse_download_path("", &origin()), None);
        assert_eq!(parse_download_path("   ", &origin()), None);
    }

    #[test]
    fn rejects_cross_origin() {
        assert_eq!(
            parse_download_path("https://evil.example/x", &origin()),
            None
        );
        assert_eq!(
            parse_download_path("//evil.example/downloads/a/b.zip", &origin()),
            None
        );
    }

    #[test]
    fn rejects_paths_outside_downloads() {
        // Dot segments normalize away during URL resolution; what is left
        // must still fail the shape check.
        assert_eq!(parse_download_path("../../etc/passwd", &origin()), None);
        assert_eq!(parse_download_path("/etc/passwd", &origin()), None);
    }

    #[test]
    fn rejects_bad_slug() {
        assert_eq!(
            parse_download_path("/downloads/Network-AI/x.zip", &origin()),
            None
        );
        assert_eq!(
            parse_download_path("/downloads/net_probe/x.zip", &origin()),
            None
        );
        assert_eq!(parse_download_path("/downloads//x.zip", &origin()), None);
    }

    #[test]
    fn rejects_bad_filename_characters() {
        assert_eq!(
            parse_download_path("/downloads/net-probe/x%20y.zip", &origin()),
            None
        );
        assert_eq!(
            parse_download_path("/downloads/net-probe/", &origin()),
            None
        );
    }

    #[test]
    fn rejects_missing_filename_segment() {
        assert_eq!(parse_download_path("/downloads/net-probe", &origin()), None);
    }

    #[test]
    fn drops_query_and_keeps_pathname() {
        assert_eq!(
            parse_download_path("/downloads/net-probe/a.zip?token=1", &origin()).as_deref(),
            Some("/downloads/net-probe/a.zip")
        );
    }
}
