//! Template renderer.

use crate::content::ChangeLog;
use crate::links::ChangeKind;
use handlebars::{no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde_json::{json, Value};

/// Default PR body: changes grouped by file, followed by totals.
pub const DEFAULT_PR_TEMPLATE: &str = r#"## Link updates

This PR updates outdated links and keywords across the repository.

{{#each files}}
### `{{file}}`

{{#each changes}}
- `{{oldLink}}` → `{{newLink}}`{{#if (eq kind "keyword")}} (keyword){{/if}}
{{/each}}

{{/each}}
**Total:** {{total_links}} link(s) updated in {{total_files}} file(s) ({{url_changes}} URL, {{keyword_changes}} keyword).
"#;

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Markdown output
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));

    hbs
}

/// Usage: `{{#if (eq variable "value")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Renders change reports.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the default PR body for a change log.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_pr_body(&self, log: &ChangeLog) -> Result<String, super::TemplateError> {
        self.render_report(DEFAULT_PR_TEMPLATE, log)
    }

    /// Renders `template` against a change log.
    ///
    /// Available variables: `files` (each with `file` and `changes`, each
    /// change with `oldLink`, `newLink` and `kind`), `total_files`,
    /// `total_links`, `url_changes` and `keyword_changes`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_report(
        &self,
        template: &str,
        log: &ChangeLog,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "files": log.by_file(),
            "total_files": log.files_changed(),
            "total_links": log.len(),
            "url_changes": log.count_kind(ChangeKind::Url),
            "keyword_changes": log.count_kind(ChangeKind::Keyword),
        });

        self.render_template(template, &data)
    }

    fn render_template(
        &self,
        template: &str,
        data: &Value,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ChangeRecord;

    fn sample_log() -> ChangeLog {
        let mut log = ChangeLog::new();
        log.push(ChangeRecord {
            file: "README.md".to_string(),
            old_link: "https://github.com/olduser/oldrepo".to_string(),
            new_link: "https://github.com/testowner/testrepo".to_string(),
            kind: ChangeKind::Url,
        });
        log.push(ChangeRecord {
            file: "docs/guide.md".to_string(),
            old_link: "old-link".to_string(),
            new_link: "new-link".to_string(),
            kind: ChangeKind::Keyword,
        });
        log
    }

    #[test]
    fn renders_changes_grouped_by_file() {
        let body = TemplateRenderer::new().render_pr_body(&sample_log()).unwrap();

        assert!(body.contains("### `README.md`"));
        assert!(body.contains(
            "- `https://github.com/olduser/oldrepo` → `https://github.com/testowner/testrepo`"
        ));
        assert!(body.contains("### `docs/guide.md`"));
        assert!(body.contains("- `old-link` → `new-link` (keyword)"));
        assert!(body.contains("2 link(s) updated in 2 file(s) (1 URL, 1 keyword)"));
    }

    #[test]
    fn renders_custom_templates() {
        let body = TemplateRenderer::new()
            .render_report("{{total_links}}/{{total_files}}", &sample_log())
            .unwrap();
        assert_eq!(body, "2/2");
    }

    #[test]
    fn rejects_unknown_variables() {
        let result = TemplateRenderer::new().render_report("{{missing}}", &sample_log());
        assert!(result.is_err());
    }

    #[test]
    fn no_html_escaping() {
        let mut log = ChangeLog::new();
        log.push(ChangeRecord {
            file: "a.html".to_string(),
            old_link: "<b>old</b>".to_string(),
            new_link: "<b>new</b>".to_string(),
            kind: ChangeKind::Keyword,
        });

        let body = TemplateRenderer::new()
            .render_report("{{#each files}}{{#each changes}}{{oldLink}}{{/each}}{{/each}}", &log)
            .unwrap();
        assert_eq!(body, "<b>old</b>");
    }
}
