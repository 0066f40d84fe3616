//! Project settings for protostyle.
//!
//! - Settings definitions in [`settings`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use protostyle::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".protostyle.yml"), "fix: true").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert!(settings.fix);
//! ```

pub mod loader;
pub mod settings;

pub use loader::{
    find_project_root, find_settings_file, load_settings, parse_settings, SETTINGS_FILE_NAMES,
};
pub use settings::LintSettings;
