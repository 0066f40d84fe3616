//! Lint command implementation.
//!
//! The `protostyle lint` command checks parsed schema trees with the lint
//! rule system and, in fix mode, renames offending fields in their sources.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::config::load_settings;
use crate::error::{ProtostyleError, Result};
use crate::lint::{
    HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, OutputFormat, RuleRegistry,
    Severity,
};
use crate::schema::{load_tree, Proto};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, config: Option<PathBuf>, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Run every rule against one tree.
    fn run_rules(
        &self,
        registry: &RuleRegistry,
        proto: &Proto,
        source: &Path,
    ) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();
        for rule in registry.iter() {
            tracing::debug!("Applying {} to {}", rule.id(), source.display());
            diagnostics.extend(rule.apply(proto, source)?);
        }
        Ok(diagnostics)
    }

    /// Format diagnostics using the appropriate formatter.
    fn format_output(&self, format: OutputFormat, diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();

        match format {
            OutputFormat::Json => {
                JsonFormatter::new().format(diagnostics, &mut output).ok();
            }
            OutputFormat::Human => {
                HumanFormatter::new().format(diagnostics, &mut output).ok();
            }
        }

        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = match load_settings(&self.project_root, self.config.as_deref()) {
            Ok(s) => s,
            Err(ProtostyleError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        }
        .with_overrides(self.args.fix, self.args.strict, self.args.format);

        let registry = RuleRegistry::with_builtins(settings.fix);
        let mut diagnostics = Vec::new();

        for tree_path in &self.args.trees {
            let proto = match load_tree(tree_path) {
                Ok(proto) => proto,
                Err(ProtostyleError::TreeNotFound { path }) => {
                    ui.error(&format!("Tree document not found: {}", path.display()));
                    return Ok(CommandResult::failure(2));
                }
                Err(ProtostyleError::TreeParseError { path, message }) => {
                    ui.error(&format!("Parse error in {}: {}", path.display(), message));
                    return Ok(CommandResult::failure(1));
                }
                Err(e) => return Err(e),
            };

            let source = proto.source_path(&self.project_root);
            let found = self.run_rules(&registry, &proto, &source)?;

            let fixed = found.iter().filter(|d| d.fixed).count();
            if fixed > 0 {
                ui.success(&format!("Fixed {} field name(s) in {}", fixed, source.display()));
            }

            diagnostics.extend(found);
        }

        let remaining: Vec<&LintDiagnostic> = diagnostics.iter().filter(|d| !d.fixed).collect();
        let has_errors = remaining.iter().any(|d| d.severity == Severity::Error);
        let has_warnings = remaining.iter().any(|d| d.severity == Severity::Warning);
        let should_fail = has_errors || (settings.strict && has_warnings);

        if diagnostics.is_empty() && settings.format == OutputFormat::Human {
            ui.success("No issues found");
            return Ok(CommandResult::success());
        }

        let output = self.format_output(settings.format, &diagnostics);

        if settings.format == OutputFormat::Human {
            for line in output.lines() {
                if line.starts_with("error") {
                    ui.error(line);
                } else if line.starts_with("warning") {
                    ui.warning(line);
                } else {
                    ui.message(line);
                }
            }
        } else {
            ui.message(output.trim_end());
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
