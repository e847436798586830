//! Report rendering error types.

/// Error rendering a change report.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The report template failed to parse or render.
    #[error("Failed to render change report: {0}")]
    RenderFailed(#[from] handlebars::RenderError),
}
