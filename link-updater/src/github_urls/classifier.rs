//! Structural classification of GitHub URLs.
//!
//! The heuristic counts path segments and is deliberately conservative:
//! anything it cannot place returns `None` and is left untouched.

use super::patterns::split_trailing;
use super::UrlKind;

/// Decides which kind of GitHub URL `url` is.
///
/// `/sponsors/` wins over segment counting, so sponsor pages are never
/// mistaken for two-segment repository paths. Of the remaining URLs, four or
/// more non-empty `/`-separated segments (scheme, host, owner, name...) are a
/// repository, exactly three without a trailing slash are a user page.
#[must_use]
pub fn classify(url: &str) -> Option<UrlKind> {
    let (url, _) = split_trailing(url);

    if url.contains("/sponsors/") {
        return Some(UrlKind::Sponsors);
    }

    let segments = url.split('/').filter(|s| !s.is_empty()).count();
    match segments {
        n if n >= 4 => Some(UrlKind::Repo),
        3 if !url.ends_with('/') => Some(UrlKind::Username),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_shapes() {
        assert_eq!(classify("https://github.com/alice"), Some(UrlKind::Username));
        assert_eq!(classify("https://github.com/alice/repo"), Some(UrlKind::Repo));
        assert_eq!(
            classify("https://github.com/alice/repo/issues/1"),
            Some(UrlKind::Repo)
        );
        assert_eq!(
            classify("https://github.com/sponsors/alice"),
            Some(UrlKind::Sponsors)
        );
    }

    #[test]
    fn ambiguous_urls_are_not_classified() {
        assert_eq!(classify("https://github.com/alice/"), None);
        assert_eq!(classify("https://github.com"), None);
        assert_eq!(classify("https://github.com/"), None);
    }

    #[test]
    fn ignores_trailing_artifacts() {
        assert_eq!(classify("https://github.com/alice\""), Some(UrlKind::Username));
        assert_eq!(classify("https://github.com/alice> "), Some(UrlKind::Username));
    }
}
