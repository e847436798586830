//! Resolution of `${{ ... }}` expressions in replacement values.

use crate::identity::RepoIdentity;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const REPOSITORY_EXPRESSION: &str = "${{ github.repository }}";

static SECRET_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{\{\s*secrets\.(\w+)\s*\}\}")
        .expect("Invalid regex pattern for secret expressions")
});

/// Resolves template expressions in a replacement value.
///
/// A value mentioning `${{ github.repository }}` becomes the repository's
/// web URL outright. `${{ secrets.NAME }}` is replaced by the environment
/// variable `NAME`, or nothing when it is unset.
#[must_use]
pub fn resolve_template(value: &str, identity: &RepoIdentity) -> String {
    if value.contains(REPOSITORY_EXPRESSION) {
        return identity.html_url();
    }

    SECRET_EXPRESSION
        .replace_all(value, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> RepoIdentity {
        RepoIdentity::new("testowner", "testrepo")
    }

    #[test]
    fn resolves_repository_expression() {
        assert_eq!(
            resolve_template("${{ github.repository }}", &identity()),
            "https://github.com/testowner/testrepo"
        );
    }

    #[test]
    fn resolves_secrets_from_environment() {
        temp_env::with_var("LINK_UPDATER_TEST_SECRET", Some("s3cr3t"), || {
            assert_eq!(
                resolve_template(
                    "https://host/${{ secrets.LINK_UPDATER_TEST_SECRET }}/x",
                    &identity()
                ),
                "https://host/s3cr3t/x"
            );
        });
    }

    #[test]
    fn missing_secrets_resolve_to_empty() {
        temp_env::with_var_unset("LINK_UPDATER_MISSING_SECRET", || {
            assert_eq!(
                resolve_template("a${{secrets.LINK_UPDATER_MISSING_SECRET}}b", &identity()),
                "ab"
            );
        });
    }

    #[test]
    fn plain_values_are_unchanged() {
        assert_eq!(resolve_template("new-link", &identity()), "new-link");
    }
}
