//! Fence info-string parsing for code macros.
//!
//! The info string of a fenced block carries whitespace-delimited
//! parameters, e.g. `python title My Snippet collapse`. Parsing is total:
//! any string yields a (possibly empty) language, title and collapse flag,
//! never an error.

use markstage_templates::CodeMacro;

/// Extract the language from a fence info string.
///
/// The first token is the language, unless it is the keyword `title`, which
/// always suppresses language detection.
#[must_use]
pub fn parse_language(info: &str) -> &str {
    let mut tokens = info.split_whitespace();
    match tokens.next() {
        None => info,
        Some("title") => "",
        Some(first) => first,
    }
}

/// Extract the title from a fence info string.
///
/// The title is everything past the first `title` keyword and one
/// separator character. It runs to the end of the info string, so later
/// keywords like `collapse` end up inside the title.
#[must_use]
pub fn parse_title(info: &str) -> &str {
    match info.find("title") {
        Some(index) => info.get(index + 6..).unwrap_or(""),
        None => "",
    }
}

/// Whether the info string requests a collapsed code macro.
///
/// The match is a plain substring search, so `collapse` is found even
/// inside another word.
#[must_use]
pub fn has_collapse(info: &str) -> bool {
    info.contains("collapse")
}

/// Build code macro parameters from a fence info string and block body.
pub(crate) fn code_macro(info: &str, text: &str) -> CodeMacro {
    CodeMacro {
        language: parse_language(info).to_owned(),
        collapse: has_collapse(info).to_string(),
        title: parse_title(info).to_owned(),
        text: text.to_owned(),
    }
}
