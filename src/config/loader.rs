//! Project settings discovery and loading.

use crate::config::settings::LintSettings;
use crate::error::{ProtostyleError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names recognized as project settings, in lookup order.
pub const SETTINGS_FILE_NAMES: [&str; 2] = [".protostyle.yml", ".protostyle.yaml"];

/// Find the settings file in `project_root`, if any.
pub fn find_settings_file(project_root: &Path) -> Option<PathBuf> {
    SETTINGS_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. A `.protostyle.yml` / `.protostyle.yaml` file (primary indicator)
/// 2. A `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if find_settings_file(&current).is_some() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load settings for a project.
///
/// An explicit `config` path must exist; otherwise the project root is
/// searched and a missing file yields the defaults.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings(project_root: &Path, config: Option<&Path>) -> Result<LintSettings> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => match find_settings_file(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!("No settings file in {}", project_root.display());
                return Ok(LintSettings::default());
            }
        },
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProtostyleError::ConfigNotFound { path: path.clone() }
        } else {
            ProtostyleError::Io(e)
        }
    })?;

    parse_settings(&content, &path)
}

/// Parse YAML content into settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<LintSettings> {
    if content.trim().is_empty() {
        return Ok(LintSettings::default());
    }

    serde_yaml::from_str(content).map_err(|e| ProtostyleError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
