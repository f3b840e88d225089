//! Error types for macro template rendering.

/// Error from rendering a macro template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// No template registered under the requested name.
    #[error("no template named {0:?}")]
    MissingTemplate(String),

    /// The template exists but failed to render.
    #[error("template render error: {0}")]
    Render(String),
}
