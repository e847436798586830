//! Rewriting of GitHub URLs toward the current repository identity.
//!
//! Matches are found with the recognizers in [`patterns`], classified with
//! [`classify`] when the configured type is `all`, and rewritten by one pure
//! function per [`UrlKind`]. A URL that already points at the current
//! identity is never altered, which makes a rewrite pass idempotent.

mod classifier;
mod kind;
mod patterns;

pub use classifier::classify;
pub use kind::{UrlKind, UrlSelection};
pub use patterns::{is_template_placeholder, pattern_for, split_trailing};

use crate::identity::RepoIdentity;
use crate::ignore::IgnoreSet;
use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Path segments in owner position that are GitHub pages, not accounts.
const RESERVED_OWNERS: &[&str] = &["sponsors", "orgs", "apps", "marketplace", "settings", "topics"];

static SPONSORS_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>https?://github\.com/sponsors/)(?P<handle>[A-Za-z0-9-]+)(?P<rest>.*)$")
        .expect("Invalid regex pattern for sponsors URL parts")
});

static USERNAME_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>https?://github\.com/)(?P<handle>[A-Za-z0-9-]+)(?P<rest>[?#].*)?$")
        .expect("Invalid regex pattern for username URL parts")
});

static REPO_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://github\.com/(?P<owner>[A-Za-z0-9-]+)/(?P<name>[A-Za-z0-9_.-]+)(?P<rest>.*)$")
        .expect("Invalid regex pattern for repo URL parts")
});

/// One GitHub URL replaced during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRewrite {
    /// The URL as found, without trailing punctuation.
    pub old: String,

    /// The URL written in its place.
    pub new: String,

    /// The kind the URL was rewritten as.
    pub kind: UrlKind,
}

/// Output of a rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct GithubRewrite {
    /// Rewritten content.
    pub content: String,

    /// Every replacement made, in scan order.
    pub rewrites: Vec<UrlRewrite>,
}

/// Rewrites GitHub URLs of the configured types.
#[derive(Debug, Clone)]
pub struct GithubUrlRewriter {
    selections: Vec<UrlSelection>,
    ignore: IgnoreSet,
    identity: RepoIdentity,
}

impl GithubUrlRewriter {
    /// Creates a rewriter. Selections are applied in the given order.
    pub fn new(selections: Vec<UrlSelection>, ignore: IgnoreSet, identity: RepoIdentity) -> Self {
        Self {
            selections,
            ignore,
            identity,
        }
    }

    /// Returns true if no URL types are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Rewrites every matching URL in `content`.
    ///
    /// Each configured type scans the output of the previous one, so
    /// configuring `all` alongside a concrete type is redundant but safe.
    #[must_use]
    pub fn rewrite(&self, content: &str) -> GithubRewrite {
        let mut result = GithubRewrite {
            content: content.to_string(),
            rewrites: Vec::new(),
        };

        for &selection in &self.selections {
            let pattern = pattern_for(selection);
            let rewrites = &mut result.rewrites;
            let updated = pattern.replace_all(&result.content, |caps: &Captures| {
                let matched = &caps[0];
                match self.rewrite_match(selection, matched) {
                    Some(rewrite) => {
                        let (_, trailing) = split_trailing(matched);
                        let replacement = format!("{}{trailing}", rewrite.new);
                        rewrites.push(rewrite);
                        replacement
                    }
                    None => matched.to_string(),
                }
            });
            result.content = updated.into_owned();
        }

        result
    }

    fn rewrite_match(&self, selection: UrlSelection, matched: &str) -> Option<UrlRewrite> {
        let (url, _) = split_trailing(matched);

        if self.ignore.covers_url(url) {
            trace!(url, "Skipping ignored URL");
            return None;
        }
        if is_template_placeholder(url) {
            trace!(url, "Skipping templated URL");
            return None;
        }

        let Some(kind) = selection.kind().or_else(|| classify(url)) else {
            trace!(url, "Could not classify URL");
            return None;
        };

        let new = match kind {
            UrlKind::Sponsors => rewrite_sponsors(url, &self.identity),
            UrlKind::Repo => rewrite_repo(url, &self.identity),
            UrlKind::Username => rewrite_username(url, &self.identity),
        }?;

        debug!(old = url, new = %new, %kind, "Rewrote GitHub URL");
        Some(UrlRewrite {
            old: url.to_string(),
            new,
            kind,
        })
    }
}

/// Rewrites GitHub URLs of the given types in `content`.
///
/// Convenience wrapper over [`GithubUrlRewriter`] for one-off calls.
#[must_use]
pub fn rewrite_github_urls(
    content: &str,
    selections: &[UrlSelection],
    ignore: &IgnoreSet,
    identity: &RepoIdentity,
) -> String {
    GithubUrlRewriter::new(selections.to_vec(), ignore.clone(), identity.clone())
        .rewrite(content)
        .content
}

/// Replaces the handle of a sponsors page.
fn rewrite_sponsors(url: &str, identity: &RepoIdentity) -> Option<String> {
    let caps = SPONSORS_PARTS.captures(url)?;
    if caps["handle"] == identity.owner {
        return None;
    }
    Some(format!("{}{}{}", &caps["prefix"], identity.owner, &caps["rest"]))
}

/// Replaces the handle of a user page.
fn rewrite_username(url: &str, identity: &RepoIdentity) -> Option<String> {
    let caps = USERNAME_PARTS.captures(url)?;
    let handle = &caps["handle"];
    if handle == identity.owner || RESERVED_OWNERS.contains(&handle) {
        return None;
    }
    let rest = caps.name("rest").map_or("", |m| m.as_str());
    Some(format!("{}{}{rest}", &caps["prefix"], identity.owner))
}

/// Rebuilds a repository URL on the current owner and name, keeping a
/// `.git` suffix and any sub-path.
fn rewrite_repo(url: &str, identity: &RepoIdentity) -> Option<String> {
    let caps = REPO_PARTS.captures(url)?;
    let owner = &caps["owner"];
    if RESERVED_OWNERS.contains(&owner) {
        return None;
    }

    let name = &caps["name"];
    let (name, git_suffix) = match name.strip_suffix(".git") {
        Some(stripped) if !stripped.is_empty() => (stripped, ".git"),
        _ => (name, ""),
    };

    if owner == identity.owner && name == identity.repo {
        return None;
    }

    Some(format!(
        "https://github.com/{}/{}{git_suffix}{}",
        identity.owner, identity.repo, &caps["rest"]
    ))
}
