//! HTML renderer — one fragment per record inside a fixed page skeleton.
//!
//! Free text from doc comments is not escaped: the only markup applied is
//! `|`, which starts a new paragraph, so a `<`, `>` or `&` in a comment ends
//! up verbatim in the page. The title and file paths are escaped.

use super::{RenderOptions, STYLESHEET_NAME};
use crate::error::DocError;
use crate::model::MethodRecord;

/// Render the complete page for `records`.
pub fn render_page(records: &[MethodRecord], options: &RenderOptions) -> Result<String, DocError> {
    let mut out = String::new();
    let title = html_escape(&options.title);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", title));
    out.push_str(&format!(
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">\n",
        STYLESHEET_NAME
    ));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", title));

    // Index
    if !records.is_empty() {
        out.push_str("<ul class=\"index\">\n");
        for record in records {
            out.push_str(&format!(
                "  <li><a href=\"#{}\">{}</a></li>\n",
                anchor(&record.name),
                record.name
            ));
        }
        out.push_str("</ul>\n");
    }

    for record in records {
        out.push_str(&render_record(record)?);
    }

    out.push_str(&format!(
        "<p class=\"generated\">Generated by luadoc on {}</p>\n",
        options.generated.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str("</body>\n</html>\n");
    Ok(out)
}

/// Render one record as a self-contained fragment.
pub fn render_record(record: &MethodRecord) -> Result<String, DocError> {
    if record.name.trim().is_empty() {
        return Err(DocError::MissingField {
            record: format!("<unnamed> in {}", record.source_file),
            field: "name",
        });
    }
    if record.summary.trim().is_empty() {
        return Err(DocError::MissingField {
            record: record.name.clone(),
            field: "summary",
        });
    }

    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"method\" id=\"{}\">\n",
        anchor(&record.name)
    ));
    out.push_str(&format!("<h2 class=\"method-name\">{}</h2>\n", record.name));
    out.push_str(&format!(
        "<p class=\"source\">Defined in <code>{}</code></p>\n",
        html_escape(&record.source_file)
    ));
    out.push_str(&format!(
        "<div class=\"summary\">{}</div>\n",
        paragraphs(&record.summary)
    ));

    if record.has_table() {
        out.push_str("<table class=\"parameters\">\n");
        out.push_str("<tr><th>Name</th><th>Type</th><th>Description</th></tr>\n");
        for param in &record.parameters {
            out.push_str(&format!(
                "<tr class=\"parameter\"><td><code>{}</code></td><td>{}</td><td>{}</td></tr>\n",
                param.name,
                param.ty,
                paragraphs(&param.description)
            ));
        }
        if let Some(ref ret) = record.return_value {
            out.push_str(&format!(
                "<tr class=\"return\"><td><em>returns</em></td><td>{}</td><td>{}</td></tr>\n",
                ret.ty,
                paragraphs(&ret.description)
            ));
        }
        out.push_str("</table>\n");
    }

    out.push_str("</div>\n");
    Ok(out)
}

/// Free text to paragraphs, one per `|`-separated piece.
pub fn paragraphs(text: &str) -> String {
    format!("<p>{}</p>", text.replace('|', "</p><p>"))
}

fn anchor(name: &str) -> String {
    name.to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != '-' && c != '_', "-")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Parameter, ReturnValue};
    use chrono::{Local, TimeZone};

    fn add_record() -> MethodRecord {
        MethodRecord {
            name: "add".to_string(),
            summary: "adds two numbers".to_string(),
            parameters: vec![
                Parameter {
                    name: "a".to_string(),
                    ty: "number".to_string(),
                    description: "first operand".to_string(),
                },
                Parameter {
                    name: "b".to_string(),
                    ty: "number".to_string(),
                    description: "second operand".to_string(),
                },
            ],
            return_value: Some(ReturnValue {
                ty: "number".to_string(),
                description: "the sum".to_string(),
            }),
            source_file: "math.lua".to_string(),
        }
    }

    fn options() -> RenderOptions {
        RenderOptions {
            title: "Math & more".to_string(),
            generated: Local.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn pipes_become_paragraphs() {
        assert_eq!(paragraphs("a|b"), "<p>a</p><p>b</p>");
        assert_eq!(paragraphs("plain"), "<p>plain</p>");
    }

    #[test]
    fn record_fragment() {
        let html = render_record(&add_record()).unwrap();
        assert!(html.contains("<h2 class=\"method-name\">add</h2>"));
        assert!(html.contains("Defined in <code>math.lua</code>"));
        assert!(html.contains("<div class=\"summary\"><p>adds two numbers</p></div>"));
        assert_eq!(html.matches("<tr").count(), 4);
        assert_eq!(html.matches("<th>").count(), 3);
        assert_eq!(html.matches("<tr class=\"parameter\">").count(), 2);
        assert_eq!(html.matches("<tr class=\"return\">").count(), 1);
        assert!(html.find("first operand").unwrap() < html.find("second operand").unwrap());
    }

    #[test]
    fn no_table_without_params_or_return() {
        let mut rec = add_record();
        rec.parameters.clear();
        rec.return_value = None;
        let html = render_record(&rec).unwrap();
        assert!(!html.contains("<table"));
        assert!(!html.contains("<th>"));
    }

    #[test]
    fn return_only_table() {
        let mut rec = add_record();
        rec.parameters.clear();
        let html = render_record(&rec).unwrap();
        assert_eq!(html.matches("<tr").count(), 2);
    }

    #[test]
    fn free_text_is_not_escaped() {
        let mut rec = add_record();
        rec.summary = "returns <b>bold</b>|second".to_string();
        let html = render_record(&rec).unwrap();
        assert!(html.contains("<p>returns <b>bold</b></p><p>second</p>"));
    }

    #[test]
    fn blank_name_fails() {
        let mut rec = add_record();
        rec.name = String::new();
        let err = render_record(&rec).unwrap_err();
        assert!(matches!(err, DocError::MissingField { field: "name", .. }));
    }

    #[test]
    fn blank_summary_fails() {
        let mut rec = add_record();
        rec.summary = "  ".to_string();
        let err = render_record(&rec).unwrap_err();
        assert_eq!(
            err,
            DocError::MissingField {
                record: "add".to_string(),
                field: "summary",
            }
        );
    }

    #[test]
    fn page_skeleton() {
        let page = render_page(&[add_record()], &options()).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.contains("<link rel=\"stylesheet\" type=\"text/css\" href=\"luadoc.css\">"));
        assert!(page.contains("<title>Math &amp; more</title>"));
        assert!(page.contains("<li><a href=\"#add\">add</a></li>"));
        assert!(page.contains("Generated by luadoc on 2026-10-16 09:30:00"));
        assert!(page.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn empty_page_has_no_index() {
        let page = render_page(&[], &options()).unwrap();
        assert!(!page.contains("class=\"index\""));
        assert!(page.contains("class=\"generated\""));
    }

    #[test]
    fn anchors_are_sanitized() {
        assert_eq!(anchor("string.Trim"), "string-trim");
        assert_eq!(anchor("is_empty"), "is_empty");
    }
}
