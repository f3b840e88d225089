//! Error types for markdown conversion.

use markstage_templates::TemplateError;

/// Error from a whole-document conversion.
///
/// A failed macro render leaves an incomplete document, so template errors
/// abort the conversion instead of producing partial output.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The macro template capability failed to render a code block.
    #[error("code macro render failed: {0}")]
    Template(#[from] TemplateError),
}
