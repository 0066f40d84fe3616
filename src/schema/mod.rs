//! Parsed schema trees.
//!
//! protostyle does not parse `.proto` sources itself. An upstream parser
//! serializes its position-annotated tree, and this module loads and walks it:
//!
//! - [`tree`] - Declaration types and [`Position`]
//! - [`loader`] - Reading JSON/YAML tree documents
//! - [`visitor`] - Document-order traversal with per-kind callbacks
//! - [`json_schema`] - JSON Schema for the tree document format

pub mod json_schema;
pub mod loader;
pub mod tree;
pub mod visitor;

pub use json_schema::SchemaGenerator;
pub use loader::{load_tree, parse_tree, TreeFormat};
pub use tree::{
    Enum, EnumValue, Extend, Field, FieldDecl, FieldLabel, MapField, Message, MessageElement,
    Oneof, OneofField, Position, Proto, ProtoElement, Rpc, Service,
};
pub use visitor::{walk, Visitor};
