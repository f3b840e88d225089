//! Conversion orchestrator: tag guard, code macro splicing, HTML output.

use markstage_templates::{CODE_MACRO, MacroTemplates};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::error::ConvertError;
use crate::fence;
use crate::guard;

/// Fixed parser options for the target platform, not tunable per call.
///
/// Tables, strikethrough, smart punctuation, definition lists and heading
/// attributes; fenced code, space-required headers and backslash line
/// breaks are always on in pulldown-cmark.
fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION
        | Options::ENABLE_DEFINITION_LIST
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Convert markdown text to Confluence XHTML storage format.
///
/// Namespaced tags in the input survive verbatim, and every code block is
/// rendered through `templates` as an [`CODE_MACRO`] macro invocation
/// instead of `<pre><code>` HTML. A template render failure aborts the
/// conversion; no partial output is returned.
///
/// Each call allocates its own parser and buffers, so concurrent calls are
/// safe as long as `templates` is.
pub fn convert<T: MacroTemplates>(markdown: &str, templates: &T) -> Result<String, ConvertError> {
    tracing::trace!(markdown = %markdown, "rendering markdown");

    let protected = guard::protect(markdown);

    let mut parser = Parser::new_ext(&protected, parser_options());
    let mut events: Vec<Event<'_>> = Vec::new();
    while let Some(event) = parser.next() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                // Indented blocks go through the same macro path with an
                // empty info string.
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                let mut body = String::new();
                for inner in parser.by_ref() {
                    match inner {
                        Event::Text(text) => body.push_str(&text),
                        Event::End(TagEnd::CodeBlock) => break,
                        _ => {}
                    }
                }
                let mut rendered = String::new();
                templates.render(CODE_MACRO, &fence::code_macro(&info, &body), &mut rendered)?;
                events.push(Event::Html(rendered.into()));
            }
            other => events.push(other),
        }
    }

    let mut output = String::with_capacity(protected.len() * 2);
    html::push_html(&mut output, events.into_iter());
    let markup = guard::restore(&output);

    tracing::trace!(markup = %markup, "rendered markdown to storage format");
    Ok(markup)
}
