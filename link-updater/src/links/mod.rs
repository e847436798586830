//! Literal and keyword replacement.
//!
//! Rules run in configured order over the progressively updated text, so a
//! later rule can match text inserted by an earlier one.

mod error;
mod rule;

pub use error::LinkError;
pub use rule::{ChangeKind, LinkRule, MatchMode};

use crate::ignore::IgnoreSet;
use regex::{Captures, Regex};
use std::ops::Range;
use tracing::{debug, warn};

/// A rule with its matcher built.
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: LinkRule,
    kind: ChangeKind,
    matcher: Regex,
    guard_start: bool,
    guard_end: bool,
}

impl CompiledRule {
    /// Returns true if the hit at `range` stands alone as a token.
    ///
    /// Only keywords are guarded. A guarded side must not touch a word
    /// character or `-`, so `old-link` matches neither `not-old-link` nor
    /// `old-link-v2`.
    fn is_token(&self, content: &str, range: &Range<usize>) -> bool {
        let before = content[..range.start].chars().next_back();
        let after = content[range.end..].chars().next();
        !(self.guard_start && before.is_some_and(is_token_char))
            && !(self.guard_end && after.is_some_and(is_token_char))
    }
}

/// Replacements made by one rule in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReplacement {
    /// The rule's `old` value.
    pub old: String,

    /// The rule's `new` value.
    pub new: String,

    /// Kind recorded for the change.
    pub kind: ChangeKind,

    /// Number of occurrences replaced.
    pub occurrences: usize,
}

/// Output of a rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct LinkRewrite {
    /// Rewritten content.
    pub content: String,

    /// One entry per rule that replaced at least one occurrence.
    pub replacements: Vec<LinkReplacement>,
}

/// Applies an ordered list of replacement rules.
#[derive(Debug, Clone, Default)]
pub struct LinkRewriter {
    rules: Vec<CompiledRule>,
    failures: Vec<LinkError>,
    ignore: IgnoreSet,
}

impl LinkRewriter {
    /// Builds matchers for `rules`, skipping rules whose `old` is ignored.
    ///
    /// A rule whose matcher cannot be built is logged and dropped; the
    /// remaining rules still apply. Text covered by an ignore entry is left
    /// untouched by every rule.
    pub fn new(rules: &[LinkRule], ignore: &IgnoreSet) -> Self {
        let mut rewriter = Self {
            ignore: ignore.clone(),
            ..Self::default()
        };

        for rule in rules {
            if ignore.contains(&rule.old) {
                debug!(old = %rule.old, "Skipping ignored rule");
                continue;
            }

            match compile(rule) {
                Ok(compiled) => rewriter.rules.push(compiled),
                Err(e) => {
                    warn!(old = %rule.old, error = %e, "Skipping replacement rule");
                    rewriter.failures.push(e);
                }
            }
        }

        rewriter
    }

    /// Returns the errors of rules that could not be compiled.
    #[must_use]
    pub fn failures(&self) -> &[LinkError] {
        &self.failures
    }

    /// Returns the number of rules that will be applied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule to `content`.
    #[must_use]
    pub fn rewrite(&self, content: &str) -> LinkRewrite {
        let mut result = LinkRewrite {
            content: content.to_string(),
            replacements: Vec::new(),
        };

        for compiled in &self.rules {
            let protected = self.ignore.ranges_in(&result.content);
            let source = result.content.as_str();
            let mut occurrences = 0;

            let updated = compiled.matcher.replace_all(source, |caps: &Captures| {
                let hit = &caps[0];
                let range = caps.get(0).map_or(0..0, |m| m.range());
                let covered = protected
                    .iter()
                    .any(|p| range.start < p.end && p.start < range.end);
                if covered || !compiled.is_token(source, &range) {
                    return hit.to_string();
                }
                occurrences += 1;
                compiled.rule.new.clone()
            });
            if occurrences == 0 {
                continue;
            }
            result.content = updated.into_owned();

            debug!(
                old = %compiled.rule.old,
                new = %compiled.rule.new,
                occurrences,
                "Applied replacement rule"
            );
            result.replacements.push(LinkReplacement {
                old: compiled.rule.old.clone(),
                new: compiled.rule.new.clone(),
                kind: compiled.kind,
                occurrences,
            });
        }

        result
    }
}

/// Applies `rules` to `content`, skipping ignored ones.
///
/// Convenience wrapper over [`LinkRewriter`] for one-off calls.
#[must_use]
pub fn rewrite_links(content: &str, rules: &[LinkRule], ignore: &IgnoreSet) -> String {
    LinkRewriter::new(rules, ignore).rewrite(content).content
}

/// Builds the matcher for a rule.
///
/// Keywords are guarded on each side that starts or ends with a word
/// character, so `old-link` does not match inside `not-old-linkage` while a
/// keyword such as `@scope/pkg` can still match at all. Guards are checked
/// per hit in [`CompiledRule::is_token`] since `regex` has no lookaround.
fn compile(rule: &LinkRule) -> Result<CompiledRule, LinkError> {
    let mode = rule.match_mode();
    let is_keyword = mode == MatchMode::Keyword;

    let matcher = Regex::new(&regex::escape(&rule.old)).map_err(|source| {
        LinkError::InvalidPattern {
            old: rule.old.clone(),
            source,
        }
    })?;

    Ok(CompiledRule {
        rule: rule.clone(),
        kind: mode.change_kind(),
        matcher,
        guard_start: is_keyword && rule.old.chars().next().is_some_and(is_word_char),
        guard_end: is_keyword && rule.old.chars().next_back().is_some_and(is_word_char),
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_token_char(c: char) -> bool {
    is_word_char(c) || c == '-'
}
