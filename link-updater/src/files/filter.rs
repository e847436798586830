//! File-name filtering.

use super::FileError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

/// Directories that are never descended into.
const ALWAYS_SKIPPED: &[&str] = &[".git", "node_modules"];

/// Decides which files are processed, by file name.
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl FileFilter {
    /// Compiles the `files` patterns and the ignore list.
    ///
    /// Ignore entries double as URLs and keywords, so entries that are not
    /// valid globs are skipped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::InvalidPattern`] if a `files` pattern is invalid.
    pub fn new(files: &[String], ignore: &[String]) -> Result<Self, FileError> {
        let mut include = GlobSetBuilder::new();
        for pattern in files {
            let glob = Glob::new(pattern).map_err(|source| FileError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            include.add(glob);
        }

        let mut exclude = GlobSetBuilder::new();
        for pattern in ignore {
            match Glob::new(pattern) {
                Ok(glob) => {
                    exclude.add(glob);
                }
                Err(e) => debug!(pattern = %pattern, error = %e, "Ignore entry is not a glob"),
            }
        }

        let build = |builder: GlobSetBuilder, pattern: String| {
            builder
                .build()
                .map_err(|source| FileError::InvalidPattern { pattern, source })
        };

        Ok(Self {
            include: build(include, files.join(", "))?,
            exclude: build(exclude, ignore.join(", "))?,
        })
    }

    /// Returns true if a file with this name should be processed.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        !self.exclude.is_match(file_name) && self.include.is_match(file_name)
    }

    /// Returns true if a directory with this name should not be walked.
    #[must_use]
    pub fn skips_dir(&self, dir_name: &str) -> bool {
        ALWAYS_SKIPPED.contains(&dir_name) || self.exclude.is_match(dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn matches_extensions_and_exact_names() {
        let filter = FileFilter::new(&strings(&["*.md", "LICENSE"]), &[]).unwrap();
        assert!(filter.matches("README.md"));
        assert!(filter.matches("LICENSE"));
        assert!(!filter.matches("main.rs"));
    }

    #[test]
    fn ignore_wins_over_include() {
        let filter =
            FileFilter::new(&strings(&["*.md"]), &strings(&["CHANGELOG.md"])).unwrap();
        assert!(filter.matches("README.md"));
        assert!(!filter.matches("CHANGELOG.md"));
    }

    #[test]
    fn skips_vcs_and_ignored_directories() {
        let filter = FileFilter::new(&strings(&["*.*"]), &strings(&["vendor"])).unwrap();
        assert!(filter.skips_dir(".git"));
        assert!(filter.skips_dir("node_modules"));
        assert!(filter.skips_dir("vendor"));
        assert!(!filter.skips_dir("docs"));
    }

    #[test]
    fn non_glob_ignore_entries_are_tolerated() {
        let filter = FileFilter::new(&strings(&["*.md"]), &strings(&["[broken"])).unwrap();
        assert!(filter.matches("README.md"));
    }
}
