//! Renderers for findings and tokens.
//!
//! - `pretty`: miette's graphical report, with a source excerpt and a label under the offending range
//! - `text`: one `path:row:column: severity[code]: message` line per finding
//! - `json`: one object per line (`file`, `severity`, `code`, `message`, `start`, `end`)

use miette::{GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode};
use serde_json::{Value, json};

use crate::frontend::ast::Position;
use crate::frontend::diagnostics::{Diagnostic, Severity};
use crate::frontend::lexer::Token;

/// One finding, ready for miette's graphical handler.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct Report<'a> {
    message: &'a str,
    severity: Severity,
    code: Option<&'static str>,
    src: &'a NamedSource<String>,
    span: miette::SourceSpan,
}

impl miette::Diagnostic for Report<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn std::fmt::Display + 'b>> {
        self.code.map(|code| Box::new(code) as Box<dyn std::fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(self.severity.into())
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match self.severity {
            Severity::Error => "error here",
            Severity::Warning => "warning here",
            Severity::Info => "here",
        };
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(label.to_string()),
            self.span,
        ))))
    }
}

/// Render findings for one file with miette's graphical handler.
pub fn render_pretty(path: &str, source: &str, diagnostics: &[Diagnostic], theme: GraphicalTheme) -> String {
    let src = NamedSource::new(path, source.to_string());
    let handler = GraphicalReportHandler::new_themed(theme);
    let mut out = String::new();
    for diagnostic in diagnostics {
        let report = Report {
            message: &diagnostic.message,
            severity: diagnostic.severity,
            code: diagnostic.code,
            src: &src,
            span: diagnostic.span.into(),
        };
        if handler.render_report(&mut out, &report).is_err() {
            // Fall back to the plain line if the excerpt cannot be rendered
            out.push_str(&format!("{path}:{diagnostic}\n"));
        }
    }
    out
}

/// Render findings as `path:row:column: severity[code]: message` lines.
pub fn render_text(path: &str, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| format!("{path}:{diagnostic}\n"))
        .collect()
}

/// Render findings as JSON lines.
pub fn render_json(path: &str, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for d in diagnostics {
        let line = json!({
            "file": path,
            "severity": d.severity.as_str(),
            "code": d.code,
            "message": d.message,
            "start": position(d.range.start),
            "end": position(d.range.end),
        });
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

fn position(at: Position) -> Value {
    json!({ "row": at.row, "column": at.column })
}

/// Token stream as a JSON array of `{value, row, column, type, length}` objects.
pub fn tokens_json(tokens: &[Token]) -> Value {
    Value::Array(
        tokens
            .iter()
            .map(|token| {
                json!({
                    "value": token.contents,
                    "row": token.row(),
                    "column": token.column(),
                    "type": token.kind.type_name(),
                    "length": token.length(),
                })
            })
            .collect(),
    )
}

/// Token stream as aligned `row:column  type  contents` lines.
pub fn tokens_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            let at = format!("{}:{}", token.row(), token.column());
            format!("{at:<8} {:<14} {:?}\n", token.kind.type_name(), token.contents)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::lexer::lex;
    use crate::lint::lint_source;

    #[test]
    fn text_lines_carry_path_position_and_code() {
        let diagnostics = lint_source("if (x = 1) { 1 }");
        insta::assert_snapshot!(render_text("demo.R", &diagnostics), @r"
        demo.R:1:5: warning[assignment-in-if]: Using '=' for assignment in 'if' condition
        ");
    }

    #[test]
    fn json_lines_are_one_object_each() {
        let diagnostics = lint_source("x == NULL");
        let out = render_json("demo.R", &diagnostics);
        assert_eq!(out.lines().count(), 1);
        let value: Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["file"], "demo.R");
        assert_eq!(value["severity"], "warning");
        assert_eq!(value["code"], "null-comparison");
        assert_eq!(value["start"], json!({ "row": 1, "column": 1 }));
        assert_eq!(value["end"], json!({ "row": 1, "column": 10 }));
    }

    #[test]
    fn pretty_report_names_file_and_code() {
        let source = "if (a & b) {\n  1\n}\n";
        let diagnostics = lint_source(source);
        let out = render_pretty("demo.R", source, &diagnostics, GraphicalTheme::unicode_nocolor());
        assert!(out.contains("scalar-ops-in-if"));
        assert!(out.contains("Prefer '&&' to '&' in 'if' statement condition"));
        assert!(out.contains("demo.R"));
    }

    #[test]
    fn tokens_render_with_stable_type_names() {
        let tokens = lex("x == NULL");
        let value = tokens_json(&tokens);
        let types: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["type"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(types, ["identifier", "operator", "keyword", "end"]);
        assert_eq!(value[1], json!({ "value": "==", "row": 1, "column": 3, "type": "operator", "length": 2 }));
        insta::assert_snapshot!(tokens_text(&tokens), @r#"
        1:1      identifier     "x"
        1:3      operator       "=="
        1:6      keyword        "NULL"
        1:10     end            ""
        "#);
    }
}
