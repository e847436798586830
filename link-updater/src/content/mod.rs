//! Per-file content updates.
//!
//! Runs the GitHub URL pass, then the literal/keyword pass over its output,
//! and records every change into a caller-owned [`ChangeLog`].

mod change_log;

pub use change_log::{ChangeLog, ChangeRecord, FileChanges};

use crate::config::LinkConfig;
use crate::github_urls::GithubUrlRewriter;
use crate::identity::RepoIdentity;
use crate::ignore::IgnoreSet;
use crate::links::{ChangeKind, LinkError, LinkRewriter};

/// Applies the configured rewrites to file contents.
#[derive(Debug, Clone)]
pub struct ContentUpdater {
    github: GithubUrlRewriter,
    links: LinkRewriter,
}

impl ContentUpdater {
    /// Creates an updater from prepared rewriters.
    pub fn new(github: GithubUrlRewriter, links: LinkRewriter) -> Self {
        Self { github, links }
    }

    /// Builds both rewriters from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &LinkConfig, identity: &RepoIdentity) -> Self {
        let ignore = IgnoreSet::new(config.ignore.iter().cloned());
        let github = GithubUrlRewriter::new(
            config.github_urls.types.clone(),
            ignore.clone(),
            identity.clone(),
        );
        let links = LinkRewriter::new(&config.links, &ignore);
        Self::new(github, links)
    }

    /// Returns the rules that were dropped because they could not be compiled.
    #[must_use]
    pub fn rule_failures(&self) -> &[LinkError] {
        self.links.failures()
    }

    /// Rewrites `content`, appending a record per change to `log`.
    ///
    /// `file` is only used to label records.
    pub fn update(&self, content: &str, file: &str, log: &mut ChangeLog) -> String {
        let mut updated = content.to_string();

        if !self.github.is_empty() {
            let result = self.github.rewrite(&updated);
            for rewrite in result.rewrites {
                log.push(ChangeRecord {
                    file: file.to_string(),
                    old_link: rewrite.old,
                    new_link: rewrite.new,
                    kind: ChangeKind::Url,
                });
            }
            updated = result.content;
        }

        let result = self.links.rewrite(&updated);
        for replacement in result.replacements {
            for _ in 0..replacement.occurrences {
                log.push(ChangeRecord {
                    file: file.to_string(),
                    old_link: replacement.old.clone(),
                    new_link: replacement.new.clone(),
                    kind: replacement.kind,
                });
            }
        }

        result.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github_urls::UrlSelection;
    use crate::links::LinkRule;

    fn updater(
        selections: Vec<UrlSelection>,
        rules: Vec<LinkRule>,
        ignore: &[&str],
    ) -> ContentUpdater {
        let ignore = IgnoreSet::new(ignore.iter().copied());
        ContentUpdater::new(
            GithubUrlRewriter::new(
                selections,
                ignore.clone(),
                RepoIdentity::new("testowner", "testrepo"),
            ),
            LinkRewriter::new(&rules, &ignore),
        )
    }

    #[test]
    fn records_one_change_per_occurrence() {
        let updater = updater(vec![], vec![LinkRule::new("old-link", "new-link")], &[]);
        let mut log = ChangeLog::new();

        let result = updater.update("This contains old-link in text", "test.md", &mut log);

        assert_eq!(result, "This contains new-link in text");
        assert_eq!(
            log.records(),
            &[ChangeRecord {
                file: "test.md".to_string(),
                old_link: "old-link".to_string(),
                new_link: "new-link".to_string(),
                kind: ChangeKind::Keyword,
            }]
        );
    }

    #[test]
    fn unchanged_content_records_nothing() {
        let updater = updater(
            vec![UrlSelection::All],
            vec![LinkRule::new("old-link", "new-link")],
            &[],
        );
        let mut log = ChangeLog::new();
        let content = "Nothing to see at https://github.com/testowner/testrepo here.";

        assert_eq!(updater.update(content, "a.md", &mut log), content);
        assert!(log.is_empty());
    }

    #[test]
    fn literal_pass_runs_on_rewritten_urls() {
        let updater = updater(
            vec![UrlSelection::Repo],
            vec![LinkRule::new(
                "https://github.com/testowner/testrepo/wiki",
                "https://docs.example.com",
            )],
            &[],
        );
        let mut log = ChangeLog::new();

        let result = updater.update("See https://github.com/old/repo/wiki", "a.md", &mut log);

        assert_eq!(result, "See https://docs.example.com");
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.records()[0].new_link,
            "https://github.com/testowner/testrepo/wiki"
        );
        assert_eq!(log.records()[1].old_link, "https://github.com/testowner/testrepo/wiki");
    }

    #[test]
    fn ignored_values_are_left_alone() {
        let updater = updater(
            vec![UrlSelection::All],
            vec![LinkRule::new("old-link", "new-link")],
            &["old-link", "https://github.com/keep"],
        );
        let mut log = ChangeLog::new();
        let content = "old-link https://github.com/keep/this";

        assert_eq!(updater.update(content, "a.md", &mut log), content);
        assert!(log.is_empty());
    }

    #[test]
    fn reports_rules_that_fail_to_compile() {
        let updater = updater(
            vec![],
            vec![
                LinkRule::new("x".repeat(10 * 1024 * 1024), "y"),
                LinkRule::new("old-link", "new-link"),
            ],
            &[],
        );
        let mut log = ChangeLog::new();

        assert_eq!(updater.rule_failures().len(), 1);
        assert_eq!(updater.update("old-link", "a.md", &mut log), "new-link");
        assert_eq!(log.len(), 1);
    }
}
