//! JSON output formatter.
//!
//! Formats lint diagnostics as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    diagnostics: Vec<JsonDiagnostic>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    rule_id: String,
    severity: String,
    message: String,
    file: String,
    line: usize,
    column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
    fixed: bool,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    hints: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn count(diagnostics: &[LintDiagnostic], severity: Severity) -> usize {
        diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let json_diagnostics: Vec<_> = diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                rule_id: d.rule_id.0.clone(),
                severity: d.severity.to_string(),
                message: d.message.clone(),
                file: d.span.file.display().to_string(),
                line: d.span.line(),
                column: d.span.column(),
                suggestion: d.suggestion.clone(),
                fixed: d.fixed,
            })
            .collect();

        let summary = JsonSummary {
            total: diagnostics.len(),
            errors: Self::count(diagnostics, Severity::Error),
            warnings: Self::count(diagnostics, Severity::Warning),
            hints: Self::count(diagnostics, Severity::Hint),
        };

        let output = JsonOutput {
            diagnostics: json_diagnostics,
            summary,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{RuleId, Span};
    use crate::schema::Position;

    fn diagnostic(rule: &str, severity: Severity, message: &str) -> LintDiagnostic {
        LintDiagnostic::new(
            RuleId::new(rule),
            severity,
            Span::new("user.proto", Position::new(10, 5)),
            message,
        )
    }

    fn render(diagnostics: &[LintDiagnostic]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(diagnostics, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = render(&[diagnostic("test", Severity::Error, "Error message")]);

        assert!(parsed["diagnostics"].is_array());
        assert_eq!(parsed["summary"]["total"].as_u64().unwrap(), 1);
    }

    #[test]
    fn reports_fixed_flag() {
        let mut fixed = diagnostic("test", Severity::Error, "msg");
        fixed.mark_fixed();
        let parsed = render(&[fixed, diagnostic("test", Severity::Error, "other")]);

        assert_eq!(parsed["diagnostics"][0]["fixed"], true);
        assert_eq!(parsed["diagnostics"][1]["fixed"], false);
    }

    #[test]
    fn includes_location() {
        let parsed = render(&[diagnostic("test", Severity::Error, "msg")]);

        assert_eq!(parsed["diagnostics"][0]["file"], "user.proto");
        assert_eq!(parsed["diagnostics"][0]["line"], 10);
        assert_eq!(parsed["diagnostics"][0]["column"], 5);
    }

    #[test]
    fn omits_missing_suggestion() {
        let parsed = render(&[diagnostic("test", Severity::Error, "msg")]);
        assert!(parsed["diagnostics"][0].get("suggestion").is_none());

        let parsed =
            render(&[diagnostic("test", Severity::Error, "msg").with_suggestion("Use x instead")]);
        assert_eq!(parsed["diagnostics"][0]["suggestion"], "Use x instead");
    }

    #[test]
    fn summary_counts_by_severity() {
        let parsed = render(&[
            diagnostic("r1", Severity::Error, "e1"),
            diagnostic("r2", Severity::Error, "e2"),
            diagnostic("r3", Severity::Warning, "w1"),
            diagnostic("r4", Severity::Hint, "h1"),
        ]);

        assert_eq!(parsed["summary"]["total"], 4);
        assert_eq!(parsed["summary"]["errors"], 2);
        assert_eq!(parsed["summary"]["warnings"], 1);
        assert_eq!(parsed["summary"]["hints"], 1);
    }

    #[test]
    fn empty_diagnostics() {
        let parsed = render(&[]);
        assert_eq!(parsed["summary"]["total"], 0);
    }
}
