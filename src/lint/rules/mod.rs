//! Built-in lint rules.
//!
//! This module contains all the built-in style rules that come with protostyle.

pub mod field_names_lower_snake_case;

pub use field_names_lower_snake_case::FieldNamesLowerSnakeCaseRule;
