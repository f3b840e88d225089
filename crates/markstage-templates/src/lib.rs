//! Macro template capability for Confluence storage-format rendering.
//!
//! The converter in `markstage-markup` does not hardcode the markup a code
//! macro expands to. Instead it renders through the [`MacroTemplates`]
//! trait, which models a "render named template with parameters into a
//! buffer" operation. [`StorageTemplates`] is the built-in template set for
//! the Confluence storage format; callers with their own template library
//! can implement the trait instead.

mod error;
mod macros;
mod storage;

pub use error::TemplateError;
pub use macros::{CODE_MACRO, CodeMacro, MacroTemplates};
pub use storage::StorageTemplates;
