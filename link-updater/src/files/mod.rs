//! Walking configured paths and updating matching files.

mod error;
mod filter;

pub use error::FileError;
pub use filter::FileFilter;

use crate::content::{ChangeLog, ContentUpdater};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Result of walking all configured paths.
#[derive(Debug, Clone, Default)]
pub struct FileScan {
    /// Files that matched the filter and were read.
    pub files_scanned: usize,

    /// Files whose content changed, in walk order.
    pub files_changed: Vec<PathBuf>,
}

impl FileScan {
    /// Returns true if any file changed.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.files_changed.is_empty()
    }
}

/// Walks `roots` below `base` with a one-off [`FileProcessor`].
///
/// # Errors
///
/// Returns [`FileError::WalkFailed`] if a directory cannot be traversed.
pub fn walk_paths(
    base: &Path,
    roots: &[String],
    filter: &FileFilter,
    updater: &ContentUpdater,
    log: &mut ChangeLog,
    dry_run: bool,
) -> Result<FileScan, FileError> {
    FileProcessor::new(base, filter, updater, dry_run).process_paths(roots, log)
}

/// Applies a [`ContentUpdater`] to every matching file below a set of roots.
pub struct FileProcessor<'a> {
    base: &'a Path,
    filter: &'a FileFilter,
    updater: &'a ContentUpdater,
    dry_run: bool,
}

impl<'a> FileProcessor<'a> {
    /// Creates a processor. Roots are resolved against `base`, and change
    /// records are labelled with paths relative to it.
    pub fn new(
        base: &'a Path,
        filter: &'a FileFilter,
        updater: &'a ContentUpdater,
        dry_run: bool,
    ) -> Self {
        Self {
            base,
            filter,
            updater,
            dry_run,
        }
    }

    /// Walks every root, rewriting matching files.
    ///
    /// Missing roots and unreadable files are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::WalkFailed`] if a directory cannot be traversed.
    pub fn process_paths(
        &self,
        roots: &[String],
        log: &mut ChangeLog,
    ) -> Result<FileScan, FileError> {
        let mut scan = FileScan::default();

        for root in roots {
            let root_path = self.base.join(root);
            if !root_path.exists() {
                warn!(path = %root, "Path not found");
                continue;
            }
            self.process_root(&root_path, log, &mut scan)?;
        }

        Ok(scan)
    }

    fn process_root(
        &self,
        root: &Path,
        log: &mut ChangeLog,
        scan: &mut FileScan,
    ) -> Result<(), FileError> {
        debug!(root = %root.display(), "Walking path");

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !self.filter.skips_dir(&entry.file_name().to_string_lossy())
            });

        for entry in walker {
            let entry = entry.map_err(|source| FileError::WalkFailed {
                path: root.display().to_string(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if !self.filter.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }

            scan.files_scanned += 1;
            if self.update_file(entry.path(), log) {
                scan.files_changed.push(entry.path().to_path_buf());
            }
        }

        Ok(())
    }

    /// Rewrites one file. Records only reach `log` once the new content is
    /// written (or would be, in dry-run mode).
    fn update_file(&self, path: &Path, log: &mut ChangeLog) -> bool {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                return false;
            }
        };

        let label = self.label(path);
        let mut file_log = ChangeLog::new();
        let updated = self.updater.update(&content, &label, &mut file_log);
        if updated == content {
            return false;
        }

        if !self.dry_run {
            if let Err(e) = std::fs::write(path, &updated) {
                warn!(path = %path.display(), error = %e, "Failed to write file");
                return false;
            }
        }

        info!(path = %label, changes = file_log.len(), dry_run = self.dry_run, "Updated file");
        log.extend(file_log);
        true
    }

    /// Path relative to the base, with `/` separators.
    fn label(&self, path: &Path) -> String {
        path.strip_prefix(self.base)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
            .trim_start_matches("./")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github_urls::{GithubUrlRewriter, UrlSelection};
    use crate::identity::RepoIdentity;
    use crate::ignore::IgnoreSet;
    use crate::links::{LinkRewriter, LinkRule};
    use std::fs;
    use tempfile::TempDir;

    fn updater() -> ContentUpdater {
        ContentUpdater::new(
            GithubUrlRewriter::new(
                vec![UrlSelection::All],
                IgnoreSet::default(),
                RepoIdentity::new("testowner", "testrepo"),
            ),
            LinkRewriter::new(&[LinkRule::new("old-link", "new-link")], &IgnoreSet::default()),
        )
    }

    fn filter() -> FileFilter {
        FileFilter::new(&["*.md".to_string()], &[]).unwrap()
    }

    #[test]
    fn rewrites_matching_files_only() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/guide.md"), "see old-link").unwrap();
        fs::write(temp.path().join("notes.txt"), "see old-link").unwrap();

        let updater = updater();
        let filter = filter();
        let processor = FileProcessor::new(temp.path(), &filter, &updater, false);
        let mut log = ChangeLog::new();
        let scan = processor.process_paths(&[".".to_string()], &mut log).unwrap();

        assert_eq!(scan.files_scanned, 1);
        assert_eq!(scan.files_changed.len(), 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("docs/guide.md")).unwrap(),
            "see new-link"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("notes.txt")).unwrap(),
            "see old-link"
        );
        assert_eq!(log.records()[0].file, "docs/guide.md");
    }

    #[test]
    fn dry_run_leaves_files_untouched() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "https://github.com/olduser").unwrap();

        let updater = updater();
        let filter = filter();
        let processor = FileProcessor::new(temp.path(), &filter, &updater, true);
        let mut log = ChangeLog::new();
        let scan = processor.process_paths(&[".".to_string()], &mut log).unwrap();

        assert!(scan.has_changes());
        assert_eq!(log.len(), 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("README.md")).unwrap(),
            "https://github.com/olduser"
        );
    }

    #[test]
    fn skips_vcs_directories_and_missing_roots() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("node_modules/pkg")).unwrap();
        fs::write(temp.path().join("node_modules/pkg/README.md"), "old-link").unwrap();

        let updater = updater();
        let filter = filter();
        let processor = FileProcessor::new(temp.path(), &filter, &updater, false);
        let mut log = ChangeLog::new();
        let scan = processor
            .process_paths(&[".".to_string(), "missing".to_string()], &mut log)
            .unwrap();

        assert_eq!(scan.files_scanned, 0);
        assert!(log.is_empty());
    }
}
