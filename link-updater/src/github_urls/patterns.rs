//! Recognizers for GitHub URLs inside free text.
//!
//! Every pattern except `sponsors` must end on a terminator (whitespace,
//! quote, `>`, a closing bracket or end of text), optionally preceded by
//! sentence punctuation. Rust's regex engine has no lookahead, so the
//! terminator is part of the match; [`split_trailing`] separates it again
//! so a rewrite can reattach exactly what followed the URL.
//!
//! The regexes are stateless: each scan starts at the beginning of its
//! input.

use super::UrlSelection;
use regex::Regex;
use std::sync::LazyLock;

/// Sentence punctuation that may trail a URL without being part of it.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Characters that end a URL.
const TERMINATORS: &[char] = &['"', '\'', '<', '>', '(', ')', '[', ']', '`'];

static USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://github\.com/[A-Za-z0-9-]+[.,;:!?]*(?:[\s"'<>()\[\]`]|$)"#)
        .expect("Invalid regex pattern for username URLs")
});

static REPO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"https?://github\.com/[A-Za-z0-9-]+/[A-Za-z0-9_.-]+(?:[/#?][^\s"'<>()\[\]`]*)?[.,;:!?]*(?:[\s"'<>()\[\]`]|$)"#,
    )
    .expect("Invalid regex pattern for repo URLs")
});

static SPONSORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://github\.com/sponsors/[A-Za-z0-9-]+")
        .expect("Invalid regex pattern for sponsors URLs")
});

static ALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://github\.com(?:/[^\s"'<>()\[\]`]*)?[.,;:!?]*(?:[\s"'<>()\[\]`]|$)"#)
        .expect("Invalid regex pattern for GitHub URLs")
});

static TEMPLATE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{[^}]*\}").expect("Invalid regex pattern for template placeholders")
});

/// Returns the recognizer for a configured URL type.
#[must_use]
pub fn pattern_for(selection: UrlSelection) -> &'static Regex {
    match selection {
        UrlSelection::Username => &USERNAME,
        UrlSelection::Repo => &REPO,
        UrlSelection::Sponsors => &SPONSORS,
        UrlSelection::All => &ALL,
    }
}

/// Splits a match into the URL proper and whatever trails it
/// (punctuation, a terminator character).
#[must_use]
pub fn split_trailing(matched: &str) -> (&str, &str) {
    let url = matched.trim_end_matches(|c: char| {
        c.is_whitespace() || TERMINATORS.contains(&c) || TRAILING_PUNCTUATION.contains(&c)
    });
    matched.split_at(url.len())
}

/// Returns true if the text contains a `${...}` interpolation marker.
#[must_use]
pub fn is_template_placeholder(text: &str) -> bool {
    TEMPLATE_PLACEHOLDER.is_match(text)
}
