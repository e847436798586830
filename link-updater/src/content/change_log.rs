//! Record of every rewrite performed in a run.

use crate::links::ChangeKind;
use serde::Serialize;

/// One rewrite that changed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    /// Path of the file, as labelled by the caller.
    pub file: String,

    /// Text before the rewrite.
    pub old_link: String,

    /// Text after the rewrite.
    pub new_link: String,

    /// Whether a URL or a keyword was replaced.
    pub kind: ChangeKind,
}

/// Changes recorded for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileChanges<'a> {
    /// File label.
    pub file: &'a str,

    /// Changes in the order they were recorded.
    pub changes: Vec<&'a ChangeRecord>,
}

/// Ordered, append-only list of changes.
///
/// Owned by the caller for the duration of one run. Workers processing files
/// in parallel should keep their own log and [`ChangeLog::extend`] the run's
/// log once they finish.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangeLog {
    records: Vec<ChangeRecord>,
}

impl ChangeLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: ChangeRecord) {
        self.records.push(record);
    }

    /// Appends every record of `other`, keeping its order.
    pub fn extend(&mut self, other: ChangeLog) {
        self.records.extend(other.records);
    }

    /// Returns all records in order.
    #[must_use]
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records of the given kind.
    #[must_use]
    pub fn count_kind(&self, kind: ChangeKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Groups records by file, files in first-seen order.
    #[must_use]
    pub fn by_file(&self) -> Vec<FileChanges<'_>> {
        let mut groups: Vec<FileChanges<'_>> = Vec::new();
        for record in &self.records {
            match groups.iter_mut().find(|g| g.file == record.file) {
                Some(group) => group.changes.push(record),
                None => groups.push(FileChanges {
                    file: &record.file,
                    changes: vec![record],
                }),
            }
        }
        groups
    }

    /// Number of distinct files with at least one record.
    #[must_use]
    pub fn files_changed(&self) -> usize {
        self.by_file().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str, old: &str, kind: ChangeKind) -> ChangeRecord {
        ChangeRecord {
            file: file.to_string(),
            old_link: old.to_string(),
            new_link: format!("{old}-new"),
            kind,
        }
    }

    #[test]
    fn groups_by_file_in_first_seen_order() {
        let mut log = ChangeLog::new();
        log.push(record("b.md", "x", ChangeKind::Keyword));
        log.push(record("a.md", "y", ChangeKind::Url));
        log.push(record("b.md", "z", ChangeKind::Url));

        let groups = log.by_file();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].file, "b.md");
        assert_eq!(groups[0].changes.len(), 2);
        assert_eq!(groups[1].file, "a.md");
        assert_eq!(log.files_changed(), 2);
        assert_eq!(log.count_kind(ChangeKind::Url), 2);
    }

    #[test]
    fn extends_with_other_log() {
        let mut first = ChangeLog::new();
        first.push(record("a.md", "x", ChangeKind::Keyword));
        let mut second = ChangeLog::new();
        second.push(record("b.md", "y", ChangeKind::Keyword));

        first.extend(second);
        assert_eq!(first.len(), 2);
        assert_eq!(first.records()[1].file, "b.md");
    }
}
