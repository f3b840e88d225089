//! Markdown to Confluence XHTML storage-format conversion.
//!
//! The converter wraps a general-purpose markdown engine (pulldown-cmark)
//! with the two pieces of Confluence-specific behavior that engine cannot
//! provide on its own:
//!
//! - Namespaced tags like `<ac:image>` are not valid HTML to a markdown
//!   parser, which would escape them to plain text. The tag guard swaps the
//!   colon for a sentinel before parsing and swaps it back afterwards.
//! - Fenced code blocks become `ac:code` macro invocations instead of
//!   `<pre><code>` HTML, rendered through an injected
//!   [`MacroTemplates`](markstage_templates::MacroTemplates) capability.
//!
//! Everything else — inline formatting, tables, lists, links — is left to
//! the engine's own HTML output.
//!
//! # Example
//!
//! ```
//! use markstage_markup::convert;
//! use markstage_templates::StorageTemplates;
//!
//! let markup = convert("```python\nprint(1)\n```", &StorageTemplates).unwrap();
//! assert!(markup.contains(r#"ac:name="code""#));
//! assert!(markup.contains(r#"ac:name="language">python"#));
//! ```

mod convert;
mod error;
mod fence;
mod guard;

pub use convert::convert;
pub use error::ConvertError;
pub use fence::{has_collapse, parse_language, parse_title};
