//! Strings that must never be rewritten.

use std::ops::Range;

/// The configured ignore list.
///
/// Literal rules are skipped on exact membership, GitHub URLs are skipped
/// when they equal or start with an entry. Empty entries are dropped so
/// they cannot act as a prefix of everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: Vec<String>,
}

impl IgnoreSet {
    /// Builds a set from configured entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for entry in entries {
            let entry = entry.into();
            if !entry.is_empty() && !set.entries.contains(&entry) {
                set.entries.push(entry);
            }
        }
        set
    }

    /// Returns true if `value` is an entry of the set.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }

    /// Returns true if `url` equals or starts with any entry.
    #[must_use]
    pub fn covers_url(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| url.starts_with(entry.as_str()))
    }

    /// Byte ranges of every occurrence of an entry in `content`.
    ///
    /// Ranges may overlap when entries overlap.
    #[must_use]
    pub fn ranges_in(&self, content: &str) -> Vec<Range<usize>> {
        self.entries
            .iter()
            .flat_map(|entry| {
                content
                    .match_indices(entry.as_str())
                    .map(move |(start, _)| start..start + entry.len())
            })
            .collect()
    }

    /// Iterates over the entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_entries() {
        let ignore = IgnoreSet::new(["old-link"]);
        assert!(ignore.contains("old-link"));
        assert!(!ignore.contains("old-link-2"));
    }

    #[test]
    fn covers_urls_by_prefix() {
        let ignore = IgnoreSet::new(["https://github.com/keep"]);
        assert!(ignore.covers_url("https://github.com/keep"));
        assert!(ignore.covers_url("https://github.com/keep/repo/issues/1"));
        assert!(!ignore.covers_url("https://github.com/other/keep"));
    }

    #[test]
    fn finds_every_occurrence() {
        let ignore = IgnoreSet::new(["keep", "keep-me"]);
        let mut ranges = ignore.ranges_in("keep-me and keep");
        ranges.sort_by_key(|r| r.start);
        assert_eq!(ranges, vec![0..4, 0..7, 12..16]);
    }

    #[test]
    fn drops_empty_entries() {
        let ignore = IgnoreSet::new(["", "x", "x"]);
        assert_eq!(ignore.iter().collect::<Vec<_>>(), vec!["x"]);
        assert!(!ignore.covers_url("https://github.com/anything"));
    }
}
