//! protostyle - Field naming checks and autofix for protocol buffer schemas.
//!
//! protostyle reads the position-annotated tree of a parsed `.proto` file,
//! reports fields whose names are not lower_snake_case, and can rename them
//! in place in the schema source.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project settings discovery and loading
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, diagnostics, and source fixing
//! - [`schema`] - Parsed schema trees and traversal
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use protostyle::lint::{LintRule, FieldNamesLowerSnakeCaseRule};
//! use protostyle::schema::{parse_tree, TreeFormat};
//! use std::path::Path;
//!
//! let tree = r#"
//! filename: user.proto
//! body:
//!   - kind: message
//!     name: User
//!     position: { line: 1, column: 1 }
//!     body:
//!       - kind: field
//!         type: string
//!         name: userId
//!         number: 1
//!         position: { line: 2, column: 3 }
//! "#;
//! let proto = parse_tree(tree, TreeFormat::Yaml, Path::new("user.yml")).unwrap();
//!
//! let rule = FieldNamesLowerSnakeCaseRule::new(false);
//! let diagnostics = rule.apply(&proto, Path::new("user.proto")).unwrap();
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(
//!     diagnostics[0].message,
//!     r#"Field name "userId" must be underscore_separated_names"#
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod schema;
pub mod ui;

pub use error::{ProtostyleError, Result};
