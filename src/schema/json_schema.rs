//! JSON Schema generation for tree documents.
//!
//! This module generates a JSON Schema (Draft-07) describing the tree
//! document format, so upstream parsers can validate what they emit.

use serde_json::{json, Value};

/// Generates JSON Schema for tree documents.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for a tree document.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "$id": "https://protostyle.dev/schemas/tree.json",
            "title": "Protostyle Tree Document",
            "description": "Parsed protocol buffer schema consumed by protostyle",
            "type": "object",
            "properties": {
                "filename": {
                    "type": "string",
                    "description": "Path of the schema source, relative to the project root"
                },
                "syntax": { "type": "string" },
                "package": { "type": "string" },
                "body": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/top_level" }
                }
            },
            "required": ["filename"],
            "definitions": self.definitions()
        })
    }

    fn definitions(&self) -> Value {
        json!({
            "position": {
                "type": "object",
                "properties": {
                    "line": { "type": "integer", "minimum": 1 },
                    "column": { "type": "integer", "minimum": 1 }
                },
                "required": ["line", "column"]
            },
            "top_level": {
                "oneOf": [
                    self.tagged("message", "#/definitions/message"),
                    self.tagged("enum", "#/definitions/enum"),
                    self.tagged("extend", "#/definitions/extend"),
                    self.tagged("service", "#/definitions/service")
                ]
            },
            "message_element": {
                "oneOf": [
                    self.tagged("field", "#/definitions/field"),
                    self.tagged("map_field", "#/definitions/map_field"),
                    self.tagged("oneof", "#/definitions/oneof"),
                    self.tagged("message", "#/definitions/message"),
                    self.tagged("enum", "#/definitions/enum"),
                    self.tagged("extend", "#/definitions/extend")
                ]
            },
            "message": self.named_block("body", "#/definitions/message_element"),
            "field": self.field_schema(),
            "map_field": {
                "type": "object",
                "properties": {
                    "key_type": { "type": "string" },
                    "value_type": { "type": "string" },
                    "name": { "type": "string" },
                    "number": { "type": "integer" },
                    "position": { "$ref": "#/definitions/position" }
                },
                "required": ["key_type", "value_type", "name", "number", "position"]
            },
            "oneof": self.named_block("fields", "#/definitions/oneof_field"),
            "oneof_field": {
                "type": "object",
                "properties": {
                    "type": { "type": "string" },
                    "name": { "type": "string" },
                    "number": { "type": "integer" },
                    "position": { "$ref": "#/definitions/position" }
                },
                "required": ["type", "name", "number", "position"]
            },
            "enum": self.named_block("values", "#/definitions/enum_value"),
            "enum_value": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "number": { "type": "integer" },
                    "position": { "$ref": "#/definitions/position" }
                },
                "required": ["name", "number", "position"]
            },
            "extend": {
                "type": "object",
                "properties": {
                    "message_type": { "type": "string" },
                    "position": { "$ref": "#/definitions/position" },
                    "body": {
                        "type": "array",
                        "items": { "$ref": "#/definitions/field" }
                    }
                },
                "required": ["message_type", "position"]
            },
            "service": self.named_block("rpcs", "#/definitions/rpc"),
            "rpc": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "request": { "type": "string" },
                    "response": { "type": "string" },
                    "position": { "$ref": "#/definitions/position" }
                },
                "required": ["name", "request", "response", "position"]
            }
        })
    }

    /// Generate schema for a plain field.
    fn field_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "label": {
                    "type": "string",
                    "enum": ["optional", "required", "repeated"]
                },
                "type": { "type": "string" },
                "name": { "type": "string" },
                "number": { "type": "integer" },
                "position": { "$ref": "#/definitions/position" }
            },
            "required": ["type", "name", "number", "position"]
        })
    }

    /// A block with a name, a position and a list of children.
    fn named_block(&self, children: &str, item_ref: &str) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "position": { "$ref": "#/definitions/position" },
                (children): {
                    "type": "array",
                    "items": { "$ref": item_ref }
                }
            },
            "required": ["name", "position"]
        })
    }

    /// An element discriminated by its `kind` tag.
    fn tagged(&self, kind: &str, definition: &str) -> Value {
        json!({
            "allOf": [
                {
                    "type": "object",
                    "properties": { "kind": { "const": kind } },
                    "required": ["kind"]
                },
                { "$ref": definition }
            ]
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
