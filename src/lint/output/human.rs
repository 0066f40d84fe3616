//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: error[RULE_ID]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                diag.severity, diag.rule_id.0, diag.message
            )?;

            writeln!(
                writer,
                "  --> {}:{}:{}",
                diag.span.file.display(),
                diag.span.line(),
                diag.span.column()
            )?;

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   = help: {}", suggestion)?;
            }

            if diag.fixed {
                writeln!(writer, "   = note: fixed in source")?;
            }

            writeln!(writer)?;
        }

        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{RuleId, Span};
    use crate::schema::Position;

    fn diagnostic(severity: Severity, message: &str) -> LintDiagnostic {
        LintDiagnostic::new(
            RuleId::new("TEST_RULE"),
            severity,
            Span::new("user.proto", Position::new(4, 3)),
            message,
        )
    }

    fn render(diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();
        HumanFormatter::new()
            .format(diagnostics, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_field_name_diagnostic() {
        let output = render(&[LintDiagnostic::new(
            RuleId::new("FIELD_NAMES_LOWER_SNAKE_CASE"),
            Severity::Error,
            Span::new("user.proto", Position::new(4, 3)),
            "Field name \"userId\" must be underscore_separated_names",
        )
        .with_suggestion("Use \"user_id\" instead")]);

        insta::assert_snapshot!(output, @r#"
        error[FIELD_NAMES_LOWER_SNAKE_CASE]: Field name "userId" must be underscore_separated_names
          --> user.proto:4:3
           = help: Use "user_id" instead

        Found 1 error(s) and 0 warning(s)
        "#);
    }

    #[test]
    fn notes_fixed_diagnostic() {
        let mut fixed = diagnostic(Severity::Error, "err");
        fixed.mark_fixed();

        assert!(render(&[fixed]).contains("   = note: fixed in source"));
        assert!(!render(&[diagnostic(Severity::Error, "err")]).contains("note:"));
    }

    #[test]
    fn formats_warning_diagnostic() {
        let output = render(&[diagnostic(Severity::Warning, "Test warning message")]);

        assert!(output.contains("warning[TEST_RULE]"));
        assert!(output.contains("user.proto:4:3"));
    }

    #[test]
    fn formats_hint_diagnostic() {
        let output = render(&[diagnostic(Severity::Hint, "Test hint message")]);

        assert!(output.contains("hint[TEST_RULE]"));
        assert!(!output.contains("Found"));
    }

    #[test]
    fn formats_summary_line() {
        let output = render(&[
            diagnostic(Severity::Error, "err"),
            diagnostic(Severity::Warning, "warn"),
            diagnostic(Severity::Warning, "warn2"),
        ]);

        assert!(output.contains("1 error(s)"));
        assert!(output.contains("2 warning(s)"));
    }

    #[test]
    fn no_summary_when_no_issues() {
        let output = render(&[]);
        assert!(output.is_empty());
    }
}
