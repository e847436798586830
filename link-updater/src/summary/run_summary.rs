//! Run summary types.

use super::Publication;
use crate::content::ChangeLog;
use crate::files::FileScan;
use crate::links::ChangeKind;
use crate::pull_requests::PrStatus;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of files read.
    pub files_scanned: usize,

    /// Number of files whose content changed.
    pub files_changed: usize,

    /// Total number of link and keyword replacements.
    pub links_changed: usize,

    /// Replacements of URLs, GitHub rewrites included.
    pub url_changes: usize,

    /// Replacements of keywords and phrases.
    pub keyword_changes: usize,

    /// Link rules that failed to compile and were skipped.
    pub rules_skipped: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// How the changes were published.
    pub publication: Publication,

    /// Every change made during the run.
    pub changes: ChangeLog,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Records the result of the file walk and takes ownership of its log.
    pub fn record_scan(&mut self, scan: &FileScan, changes: ChangeLog) {
        self.files_scanned += scan.files_scanned;
        self.files_changed += scan.files_changed.len();
        self.links_changed += changes.len();
        self.url_changes += changes.count_kind(ChangeKind::Url);
        self.keyword_changes += changes.count_kind(ChangeKind::Keyword);
        self.changes.extend(changes);
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        matches!(
            self.publication,
            Publication::PullRequest(PrStatus::Failed { .. })
        )
    }

    /// Returns true if all operations were successful.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures() && self.rules_skipped == 0
    }
}
