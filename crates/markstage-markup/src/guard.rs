//! Tag guard for namespaced Confluence tags.
//!
//! A markdown parser treats `<ac:image>` as invalid HTML (tag names cannot
//! contain a colon) and escapes it to literal text. [`protect`] swaps the
//! colon for a sentinel made only of tag-name characters, so the guarded
//! tag passes through the parser as inline HTML; [`restore`] swaps it back
//! in the rendered output.

use std::sync::LazyLock;

use regex::Regex;

/// Sentinel standing in for the colon inside namespaced tag names.
///
/// Input that already contains this literal will be corrupted; documented
/// limitation.
pub(crate) const COLON_MARKER: &str = "---MARKSTAGE-COLON---";

/// Opening or closing tag whose name contains a namespace colon,
/// e.g. `<ac:image>` or `</ac:rich-text-body>`.
static NAMESPACED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?\S+?):(\S+?)>").unwrap());

/// Replace the colon of every namespaced tag with [`COLON_MARKER`].
#[must_use]
pub(crate) fn protect(input: &str) -> String {
    NAMESPACED_TAG
        .replace_all(input, format!("<${{1}}{COLON_MARKER}${{2}}>"))
        .into_owned()
}

/// Replace every [`COLON_MARKER`] occurrence with a literal colon.
#[must_use]
pub(crate) fn restore(output: &str) -> String {
    output.replace(COLON_MARKER, ":")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_protect_opening_tag() {
        assert_eq!(
            protect("<ac:image>"),
            format!("<ac{COLON_MARKER}image>")
        );
    }

    #[test]
    fn test_protect_closing_tag() {
        assert_eq!(
            protect("</ac:rich-text-body>"),
            format!("</ac{COLON_MARKER}rich-text-body>")
        );
    }

    #[test]
    fn test_protect_all_occurrences() {
        let protected = protect("<ac:image> text <ri:attachment> more </ac:image>");
        assert!(!protected.contains(':'));
        assert_eq!(protected.matches(COLON_MARKER).count(), 3);
    }

    #[test]
    fn test_plain_text_unchanged() {
        let input = "no tags here, just a colon: and <em>html</em>";
        assert_eq!(protect(input), input);
    }

    #[test]
    fn test_restore_round_trip() {
        let input = "before <ac:structured-macro> inside </ac:structured-macro> after";
        assert_eq!(restore(&protect(input)), input);
    }

    #[test]
    fn test_marker_survives_as_tag_name() {
        // The sentinel must contain only characters legal in an HTML tag
        // name, or the guarded tag gets escaped anyway.
        assert!(
            COLON_MARKER
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        );
    }
}
