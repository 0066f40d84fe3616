//! Document-order traversal of a schema tree.
//!
//! [`walk`] calls one [`Visitor`] callback per declaration kind. A callback
//! returns `true` to descend into the declaration's children and `false` to
//! skip them. Leaf declarations (fields, enum values, rpcs) have no children,
//! so their return value only states intent.

use crate::schema::tree::{
    Enum, EnumValue, Extend, Field, MapField, Message, MessageElement, Oneof, OneofField, Proto,
    ProtoElement, Rpc, Service,
};

/// Per-declaration callbacks. Every method defaults to "descend".
pub trait Visitor {
    fn visit_message(&mut self, _message: &Message) -> bool {
        true
    }

    fn visit_field(&mut self, _field: &Field) -> bool {
        true
    }

    fn visit_map_field(&mut self, _field: &MapField) -> bool {
        true
    }

    fn visit_oneof(&mut self, _oneof: &Oneof) -> bool {
        true
    }

    fn visit_oneof_field(&mut self, _field: &OneofField) -> bool {
        true
    }

    fn visit_enum(&mut self, _e: &Enum) -> bool {
        true
    }

    fn visit_enum_value(&mut self, _value: &EnumValue) -> bool {
        true
    }

    fn visit_extend(&mut self, _extend: &Extend) -> bool {
        true
    }

    fn visit_service(&mut self, _service: &Service) -> bool {
        true
    }

    fn visit_rpc(&mut self, _rpc: &Rpc) -> bool {
        true
    }
}

/// Walk every declaration of `proto` once, in document order.
pub fn walk<V: Visitor + ?Sized>(proto: &Proto, visitor: &mut V) {
    for element in &proto.body {
        match element {
            ProtoElement::Message(message) => walk_message(message, visitor),
            ProtoElement::Enum(e) => walk_enum(e, visitor),
            ProtoElement::Extend(extend) => walk_extend(extend, visitor),
            ProtoElement::Service(service) => {
                if visitor.visit_service(service) {
                    for rpc in &service.rpcs {
                        visitor.visit_rpc(rpc);
                    }
                }
            }
        }
    }
}

fn walk_message<V: Visitor + ?Sized>(message: &Message, visitor: &mut V) {
    if !visitor.visit_message(message) {
        return;
    }

    for element in &message.body {
        match element {
            MessageElement::Field(field) => {
                visitor.visit_field(field);
            }
            MessageElement::MapField(field) => {
                visitor.visit_map_field(field);
            }
            MessageElement::Oneof(oneof) => {
                if visitor.visit_oneof(oneof) {
                    for field in &oneof.fields {
                        visitor.visit_oneof_field(field);
                    }
                }
            }
            MessageElement::Message(nested) => walk_message(nested, visitor),
            MessageElement::Enum(e) => walk_enum(e, visitor),
            MessageElement::Extend(extend) => walk_extend(extend, visitor),
        }
    }
}

fn walk_enum<V: Visitor + ?Sized>(e: &Enum, visitor: &mut V) {
    if visitor.visit_enum(e) {
        for value in &e.values {
            visitor.visit_enum_value(value);
        }
    }
}

fn walk_extend<V: Visitor + ?Sized>(extend: &Extend, visitor: &mut V) {
    if visitor.visit_extend(extend) {
        for field in &extend.body {
            visitor.visit_field(field);
        }
    }
}
