//! Built-in template set for the Confluence storage format.

use std::fmt::Write;

use crate::error::TemplateError;
use crate::macros::{CODE_MACRO, CodeMacro, MacroTemplates};

/// Built-in Confluence storage-format templates.
///
/// Renders the code macro as an `ac:structured-macro` element:
/// - `collapse` parameter always emitted
/// - `language` and `title` parameters emitted only when non-empty
/// - body wrapped in `<ac:plain-text-body><![CDATA[...]]>` and not escaped
pub struct StorageTemplates;

impl MacroTemplates for StorageTemplates {
    fn render(
        &self,
        name: &str,
        params: &CodeMacro,
        out: &mut String,
    ) -> Result<(), TemplateError> {
        if name != CODE_MACRO {
            return Err(TemplateError::MissingTemplate(name.to_owned()));
        }

        out.push_str(r#"<ac:structured-macro ac:name="code" ac:schema-version="1">"#);
        write!(
            out,
            r#"<ac:parameter ac:name="collapse">{}</ac:parameter>"#,
            params.collapse
        )
        .unwrap();
        if !params.language.is_empty() {
            write!(
                out,
                r#"<ac:parameter ac:name="language">{}</ac:parameter>"#,
                escape_xml(&params.language)
            )
            .unwrap();
        }
        if !params.title.is_empty() {
            write!(
                out,
                r#"<ac:parameter ac:name="title">{}</ac:parameter>"#,
                escape_xml(&params.title)
            )
            .unwrap();
        }
        // CDATA content is not escaped
        write!(
            out,
            r"<ac:plain-text-body><![CDATA[{}]]></ac:plain-text-body>",
            params.text
        )
        .unwrap();
        out.push_str("</ac:structured-macro>");
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render_code(params: &CodeMacro) -> String {
        let mut out = String::new();
        StorageTemplates.render(CODE_MACRO, params, &mut out).unwrap();
        out
    }

    fn code_macro(language: &str, collapse: &str, title: &str, text: &str) -> CodeMacro {
        CodeMacro {
            language: language.to_owned(),
            collapse: collapse.to_owned(),
            title: title.to_owned(),
            text: text.to_owned(),
        }
    }

    #[test]
    fn test_full_macro() {
        let out = render_code(&code_macro("python", "false", "Example", "print(1)\n"));
        assert_eq!(
            out,
            concat!(
                r#"<ac:structured-macro ac:name="code" ac:schema-version="1">"#,
                r#"<ac:parameter ac:name="collapse">false</ac:parameter>"#,
                r#"<ac:parameter ac:name="language">python</ac:parameter>"#,
                r#"<ac:parameter ac:name="title">Example</ac:parameter>"#,
                "<ac:plain-text-body><![CDATA[print(1)\n]]></ac:plain-text-body>",
                "</ac:structured-macro>",
            )
        );
    }

    #[test]
    fn test_empty_language_and_title_omitted() {
        let out = render_code(&code_macro("", "false", "", "plain\n"));
        assert!(!out.contains(r#"ac:name="language""#));
        assert!(!out.contains(r#"ac:name="title""#));
        assert!(out.contains(r#"ac:name="collapse">false"#));
    }

    #[test]
    fn test_collapse_true() {
        let out = render_code(&code_macro("bash", "true", "", "ls\n"));
        assert!(out.contains(r#"<ac:parameter ac:name="collapse">true</ac:parameter>"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let out = render_code(&code_macro("", "false", "a < b & c", ""));
        assert!(out.contains(r#"<ac:parameter ac:name="title">a &lt; b &amp; c</ac:parameter>"#));
    }

    #[test]
    fn test_body_is_not_escaped() {
        let out = render_code(&code_macro("xml", "false", "", "<a href=\"x\">\n"));
        assert!(out.contains("<![CDATA[<a href=\"x\">\n]]>"));
    }

    #[test]
    fn test_unknown_template_name() {
        let mut out = String::new();
        let err = StorageTemplates
            .render("ac:jira", &code_macro("", "false", "", ""), &mut out)
            .unwrap_err();
        assert!(matches!(err, TemplateError::MissingTemplate(name) if name == "ac:jira"));
        assert_eq!(out, "");
    }
}
