//! Replacement rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// An old -> new substitution.
///
/// `new` has already had its templates resolved by the time a rule reaches
/// the rewriter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRule {
    /// Text to find.
    pub old: String,

    /// Text to write in its place.
    pub new: String,
}

impl LinkRule {
    /// Creates a rule.
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Returns how `old` is matched.
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        MatchMode::of(&self.old)
    }
}

/// How a rule's `old` value is located in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// A well-formed absolute URL, matched as a literal substring.
    Url,
    /// A single token, matched as a whole word.
    Keyword,
    /// Anything else (e.g. a multi-word phrase), matched as a literal substring.
    Phrase,
}

impl MatchMode {
    /// Determines the mode for a value.
    #[must_use]
    pub fn of(value: &str) -> Self {
        if Url::parse(value).is_ok() {
            Self::Url
        } else if value.split_whitespace().count() == 1 {
            Self::Keyword
        } else {
            Self::Phrase
        }
    }

    /// Returns the change kind recorded for replacements in this mode.
    #[must_use]
    pub fn change_kind(self) -> ChangeKind {
        match self {
            Self::Url => ChangeKind::Url,
            Self::Keyword | Self::Phrase => ChangeKind::Keyword,
        }
    }
}

/// Whether a change replaced a URL or a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Url,
    Keyword,
}

impl ChangeKind {
    /// Returns the kind as a string for template rendering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Keyword => "keyword",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
