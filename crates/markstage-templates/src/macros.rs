//! Macro parameter types and the template rendering trait.

use crate::error::TemplateError;

/// Name of the code block macro template.
///
/// This is the only template the converter itself depends on.
pub const CODE_MACRO: &str = "ac:code";

/// Parameters for a single code macro render.
///
/// Built fresh for every code block from its fence info string and body,
/// passed to the template capability, then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeMacro {
    /// Language identifier from the fence, empty when absent.
    pub language: String,
    /// Literal `"true"` or `"false"`.
    pub collapse: String,
    /// Title text from the fence, empty when absent.
    pub title: String,
    /// Raw code block body, unmodified.
    pub text: String,
}

/// Capability for rendering named macro templates.
///
/// Implementations write the expanded markup into `out`. Rendering must be
/// deterministic for the converter's output to be deterministic, and safe
/// for concurrent use if conversions run concurrently.
pub trait MacroTemplates {
    /// Render the template registered under `name` with `params` into `out`.
    fn render(&self, name: &str, params: &CodeMacro, out: &mut String)
    -> Result<(), TemplateError>;
}
