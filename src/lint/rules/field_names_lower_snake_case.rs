//! Field name case validation.
//!
//! Verifies that every field name is underscore_separated_names, as the
//! protocol buffer style guide asks for. In fix mode the offending names are
//! renamed in the schema source once the walk is over.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lint::case::{is_lower_snake_case, to_lower_snake};
use crate::lint::fix::FixEngine;
use crate::lint::tracker::{IdentOccurrence, ViolationTracker};
use crate::lint::visitor::{run_visitor, FailureSink, RuleVisitor};
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::schema::{Field, FieldDecl, MapField, OneofField, Proto, Visitor};

/// Validates that field names are lower_snake_case.
pub struct FieldNamesLowerSnakeCaseRule {
    fix_mode: bool,
}

impl FieldNamesLowerSnakeCaseRule {
    /// Create the rule; `fix_mode` renames violations in the source.
    pub fn new(fix_mode: bool) -> Self {
        Self { fix_mode }
    }

    pub fn fix_mode(&self) -> bool {
        self.fix_mode
    }
}

impl LintRule for FieldNamesLowerSnakeCaseRule {
    fn id(&self) -> RuleId {
        RuleId::new("FIELD_NAMES_LOWER_SNAKE_CASE")
    }

    fn purpose(&self) -> &str {
        "Verifies that all field names are underscore_separated_names."
    }

    fn is_official(&self) -> bool {
        true
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn apply(&self, proto: &Proto, source: &Path) -> Result<Vec<LintDiagnostic>> {
        let visitor = FieldNamesVisitor {
            sink: FailureSink::new(self.id(), self.default_severity(), source),
            tracker: ViolationTracker::new(),
            recorded: Vec::new(),
            fix_mode: self.fix_mode,
            source: source.to_path_buf(),
        };
        run_visitor(visitor, proto)
    }

    fn supports_fix(&self) -> bool {
        true
    }
}

/// Per-application state: one per file, never shared.
struct FieldNamesVisitor {
    sink: FailureSink,
    tracker: ViolationTracker,
    /// One entry per diagnostic in the sink, same order.
    recorded: Vec<IdentOccurrence>,
    fix_mode: bool,
    source: PathBuf,
}

impl FieldNamesVisitor {
    fn check(&mut self, decl: FieldDecl<'_>) -> bool {
        let name = decl.name();
        if !is_lower_snake_case(name) {
            let position = decl.position();
            let occurrence = IdentOccurrence::new(name, position);
            self.tracker.record(position.line, occurrence.clone());
            self.recorded.push(occurrence);

            let diagnostic = self
                .sink
                .failure(
                    position,
                    format!("Field name \"{}\" must be underscore_separated_names", name),
                )
                .with_suggestion(format!("Use \"{}\" instead", to_lower_snake(name)));
            self.sink.push(diagnostic);
        }
        false
    }
}

impl Visitor for FieldNamesVisitor {
    fn visit_field(&mut self, field: &Field) -> bool {
        self.check(FieldDecl::Plain(field))
    }

    fn visit_map_field(&mut self, field: &MapField) -> bool {
        self.check(FieldDecl::Map(field))
    }

    fn visit_oneof_field(&mut self, field: &OneofField) -> bool {
        self.check(FieldDecl::Oneof(field))
    }
}

impl RuleVisitor for FieldNamesVisitor {
    fn finally(&mut self) -> Result<()> {
        if self.fix_mode {
            let result = FixEngine::new().fix_file(&self.source, &self.tracker)?;
            if !result.unresolved.is_empty() {
                tracing::warn!(
                    "{} field name(s) in {} could not be fixed",
                    result.unresolved.len(),
                    self.source.display()
                );
            }

            for (diagnostic, occurrence) in self.sink.iter_mut().zip(&self.recorded) {
                if !result.unresolved.contains(occurrence) {
                    diagnostic.mark_fixed();
                }
            }
        }
        Ok(())
    }

    fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.sink.into_diagnostics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtostyleError;
    use crate::schema::{parse_tree, Position, TreeFormat};
    use std::fs;
    use tempfile::TempDir;

    const SOURCE: &str = "syntax = \"proto3\";

message User {
  string userId = 1;
  map<string, string> UserMap = 2;
  oneof choice {
    string myOneOfField = 3;
  }
  string user_name = 4;
}
";

    const TREE: &str = r#"
filename: user.proto
body:
  - kind: message
    name: User
    position: { line: 3, column: 1 }
    body:
      - { kind: field, type: string, name: userId, number: 1, position: { line: 4, column: 3 } }
      - { kind: map_field, key_type: string, value_type: string, name: UserMap, number: 2, position: { line: 5, column: 3 } }
      - kind: oneof
        name: choice
        position: { line: 6, column: 3 }
        fields:
          - { type: string, name: myOneOfField, number: 3, position: { line: 7, column: 5 } }
      - { kind: field, type: string, name: user_name, number: 4, position: { line: 9, column: 3 } }
"#;

    fn tree() -> Proto {
        parse_tree(TREE, TreeFormat::Yaml, Path::new("user.yml")).unwrap()
    }

    fn setup_source() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.proto");
        fs::write(&path, SOURCE).unwrap();
        (temp, path)
    }

    #[test]
    fn reports_every_field_variant() {
        let (_temp, path) = setup_source();
        let rule = FieldNamesLowerSnakeCaseRule::new(false);

        let diagnostics = rule.apply(&tree(), &path).unwrap();

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Field name \"userId\" must be underscore_separated_names",
                "Field name \"UserMap\" must be underscore_separated_names",
                "Field name \"myOneOfField\" must be underscore_separated_names",
            ]
        );
        assert_eq!(diagnostics[0].position(), Position::new(4, 3));
        assert_eq!(diagnostics[1].position(), Position::new(5, 3));
        assert_eq!(diagnostics[2].position(), Position::new(7, 5));
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
    }

    #[test]
    fn suggests_snake_case_name() {
        let (_temp, path) = setup_source();
        let diagnostics = FieldNamesLowerSnakeCaseRule::new(false)
            .apply(&tree(), &path)
            .unwrap();

        assert_eq!(
            diagnostics[2].suggestion.as_deref(),
            Some("Use \"my_one_of_field\" instead")
        );
    }

    #[test]
    fn check_mode_leaves_source_alone() {
        let (_temp, path) = setup_source();
        FieldNamesLowerSnakeCaseRule::new(false)
            .apply(&tree(), &path)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), SOURCE);
    }

    #[test]
    fn check_mode_does_not_need_the_source() {
        let temp = TempDir::new().unwrap();
        let diagnostics = FieldNamesLowerSnakeCaseRule::new(false)
            .apply(&tree(), &temp.path().join("missing.proto"))
            .unwrap();

        assert_eq!(diagnostics.len(), 3);
    }

    #[test]
    fn fix_mode_renames_fields() {
        let (_temp, path) = setup_source();
        let diagnostics = FieldNamesLowerSnakeCaseRule::new(true)
            .apply(&tree(), &path)
            .unwrap();

        assert_eq!(diagnostics.len(), 3);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "syntax = \"proto3\";

message User {
  string user_id = 1;
  map<string, string> user_map = 2;
  oneof choice {
    string my_one_of_field = 3;
  }
  string user_name = 4;
}
"
        );
    }

    #[test]
    fn fix_mode_marks_renamed_diagnostics_fixed() {
        let (_temp, path) = setup_source();
        let diagnostics = FieldNamesLowerSnakeCaseRule::new(true)
            .apply(&tree(), &path)
            .unwrap();

        assert!(diagnostics.iter().all(|d| d.fixed));
    }

    #[test]
    fn check_mode_marks_nothing_fixed() {
        let (_temp, path) = setup_source();
        let diagnostics = FieldNamesLowerSnakeCaseRule::new(false)
            .apply(&tree(), &path)
            .unwrap();

        assert!(diagnostics.iter().all(|d| !d.fixed));
    }

    #[test]
    fn name_split_from_its_declaration_line_stays_unfixed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.proto");
        let source = "message User {\n  string\n    userId = 1;\n  string fooBar = 2;\n}\n";
        fs::write(&path, source).unwrap();
        let proto = parse_tree(
            r#"
filename: user.proto
body:
  - kind: message
    name: User
    position: { line: 1, column: 1 }
    body:
      - { kind: field, type: string, name: userId, number: 1, position: { line: 2, column: 3 } }
      - { kind: field, type: string, name: fooBar, number: 2, position: { line: 4, column: 3 } }
"#,
            TreeFormat::Yaml,
            Path::new("user.yml"),
        )
        .unwrap();

        let diagnostics = FieldNamesLowerSnakeCaseRule::new(true)
            .apply(&proto, &path)
            .unwrap();

        assert!(!diagnostics[0].fixed);
        assert!(diagnostics[1].fixed);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "message User {\n  string\n    userId = 1;\n  string foo_bar = 2;\n}\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn fix_mode_write_failure_is_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let (temp, path) = setup_source();
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits do not bind a privileged user.
        let writable = fs::write(temp.path().join("scratch"), "").is_ok();
        let result = FieldNamesLowerSnakeCaseRule::new(true).apply(&tree(), &path);

        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o755)).unwrap();
        if writable {
            return;
        }

        assert!(matches!(result, Err(ProtostyleError::WriteSource { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), SOURCE);
    }

    #[test]
    fn fix_mode_read_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result =
            FieldNamesLowerSnakeCaseRule::new(true).apply(&tree(), &temp.path().join("gone.proto"));

        assert!(matches!(result, Err(ProtostyleError::ReadSource { .. })));
    }

    #[test]
    fn runs_are_deterministic() {
        let (_temp, path) = setup_source();
        let rule = FieldNamesLowerSnakeCaseRule::new(false);

        let first = rule.apply(&tree(), &path).unwrap();
        let second = rule.apply(&tree(), &path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn rule_metadata() {
        let rule = FieldNamesLowerSnakeCaseRule::new(false);

        assert_eq!(rule.id(), RuleId::new("FIELD_NAMES_LOWER_SNAKE_CASE"));
        assert!(rule.is_official());
        assert!(rule.supports_fix());
        assert!(!rule.fix_mode());
    }
}
