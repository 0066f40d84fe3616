//! Schema tree definitions.
//!
//! These structs mirror the tree an upstream protocol buffer parser hands
//! over: every declaration carries the 1-indexed [`Position`] of its first
//! token, and container bodies keep their elements in document order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A 1-indexed (line, column) location in the schema source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Root of a parsed schema document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Proto {
    /// Path of the schema source the tree was parsed from.
    pub filename: PathBuf,

    /// Declared syntax (`proto2`, `proto3`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,

    /// Declared package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Top-level declarations in document order.
    pub body: Vec<ProtoElement>,
}

impl Proto {
    /// Resolve the schema source path against a project root.
    ///
    /// Absolute filenames are returned unchanged.
    pub fn source_path(&self, project_root: &Path) -> PathBuf {
        if self.filename.is_absolute() {
            self.filename.clone()
        } else {
            project_root.join(&self.filename)
        }
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProtoElement {
    Message(Message),
    Enum(Enum),
    Extend(Extend),
    Service(Service),
}

/// A `message` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub body: Vec<MessageElement>,
}

/// A declaration inside a message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageElement {
    Field(Field),
    MapField(MapField),
    Oneof(Oneof),
    Message(Message),
    Enum(Enum),
    Extend(Extend),
}

/// Field cardinality label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLabel {
    Optional,
    Required,
    Repeated,
}

/// A plain field declaration, e.g. `repeated string user_id = 1;`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<FieldLabel>,
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
    pub number: u32,
    pub position: Position,
}

/// A map field declaration, e.g. `map<string, User> user_map = 2;`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapField {
    pub key_type: String,
    pub value_type: String,
    pub name: String,
    pub number: u32,
    pub position: Position,
}

/// A `oneof` group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oneof {
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub fields: Vec<OneofField>,
}

/// A field that belongs to a `oneof` group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneofField {
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
    pub number: u32,
    pub position: Position,
}

/// An `enum` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

/// A single enum constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
    pub position: Position,
}

/// An `extend` block; its body holds plain fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extend {
    pub message_type: String,
    pub position: Position,
    #[serde(default)]
    pub body: Vec<Field>,
}

/// A `service` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub rpcs: Vec<Rpc>,
}

/// An `rpc` declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rpc {
    pub name: String,
    pub request: String,
    pub response: String,
    pub position: Position,
}

/// A field-like declaration, whichever of the three variants supplied it.
#[derive(Debug, Clone, Copy)]
pub enum FieldDecl<'a> {
    Plain(&'a Field),
    Map(&'a MapField),
    Oneof(&'a OneofField),
}

impl FieldDecl<'_> {
    /// The declared field name (for maps, the map field's own name).
    pub fn name(&self) -> &str {
        match self {
            FieldDecl::Plain(f) => &f.name,
            FieldDecl::Map(f) => &f.name,
            FieldDecl::Oneof(f) => &f.name,
        }
    }

    /// Position of the declaration.
    pub fn position(&self) -> Position {
        match self {
            FieldDecl::Plain(f) => f.position,
            FieldDecl::Map(f) => f.position,
            FieldDecl::Oneof(f) => f.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display() {
        assert_eq!(Position::new(4, 3).to_string(), "4:3");
    }

    #[test]
    fn position_orders_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 5));
    }

    #[test]
    fn source_path_joins_relative_filename() {
        let proto = Proto {
            filename: PathBuf::from("api/user.proto"),
            ..Default::default()
        };
        assert_eq!(
            proto.source_path(Path::new("/work")),
            PathBuf::from("/work/api/user.proto")
        );
    }

    #[test]
    fn source_path_keeps_absolute_filename() {
        let proto = Proto {
            filename: PathBuf::from("/abs/user.proto"),
            ..Default::default()
        };
        assert_eq!(
            proto.source_path(Path::new("/work")),
            PathBuf::from("/abs/user.proto")
        );
    }

    #[test]
    fn field_decl_exposes_name_and_position() {
        let map = MapField {
            key_type: "string".into(),
            value_type: "User".into(),
            name: "UserMap".into(),
            number: 2,
            position: Position::new(7, 3),
        };
        let decl = FieldDecl::Map(&map);
        assert_eq!(decl.name(), "UserMap");
        assert_eq!(decl.position(), Position::new(7, 3));
    }

    #[test]
    fn field_type_uses_type_key() {
        let field: Field = serde_json::from_str(
            r#"{"type":"string","name":"userId","number":1,"position":{"line":4,"column":3}}"#,
        )
        .unwrap();
        assert_eq!(field.field_type, "string");
        assert!(field.label.is_none());
    }
}
