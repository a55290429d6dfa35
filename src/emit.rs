//! Code Emitter
//!
//! Lowers the element tree into nested constructor calls, e.g.
//!
//! ```text
//! div({c: [card]},
//!     span(
//!         `Hi`
//!     )
//! )
//! ```
//!
//! Indentation is derived from an explicit nesting depth, so sibling subtrees
//! can never leak indentation into each other.

use crate::ast::{Attributes, Node};
use crate::builder::class_tokens;
use crate::names::{quote_attribute_name, quote_string_literal, sanitize_identifier};

/// Column of the outermost calls, inside the generated constructor body.
pub const BASE_INDENT: usize = 12;
/// Extra columns per nesting level.
pub const INDENT_STEP: usize = 4;

/// Attributes with this prefix are event handlers and have no static form.
const EVENT_HANDLER_PREFIX: &str = "on";

fn indent(depth: usize) -> String {
    " ".repeat(BASE_INDENT + depth * INDENT_STEP)
}

fn emit_children(children: &[Node], depth: usize) -> String {
    children
        .iter()
        .map(|child| emit_node(child, depth))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Renders the attribute object literal, or an empty string for no attributes.
pub fn emit_attributes(attributes: &Attributes) -> String {
    if attributes.is_empty() {
        return String::new();
    }

    let mut fields = Vec::new();
    for (name, value) in attributes {
        if name.starts_with(EVENT_HANDLER_PREFIX) {
            continue;
        }
        if name == "class" {
            let classes = class_tokens(value)
                .map(sanitize_identifier)
                .collect::<Vec<_>>()
                .join(", ");
            fields.push(format!("c: [{}]", classes));
        } else {
            fields.push(format!(
                "{}: {}",
                quote_attribute_name(name),
                quote_string_literal(value)
            ));
        }
    }

    format!("{{{}}}", fields.join(", "))
}

/// Emits one node at the given nesting depth.
pub fn emit_node(node: &Node, depth: usize) -> String {
    match node {
        Node::Root { children } => emit_children(children, depth),

        Node::Text { value } => format!("{}{}", indent(depth), quote_string_literal(value)),

        Node::Tag {
            name,
            attributes,
            children,
        } => {
            let pad = indent(depth);
            let mut attributes = emit_attributes(attributes);

            if children.is_empty() {
                return format!("{}{}({})", pad, name, attributes);
            }

            let children = emit_children(children, depth + 1);
            if !attributes.is_empty() {
                attributes.push(',');
            }
            format!("{pad}{name}({attributes}\n{children}\n{pad})")
        }
    }
}

/// Emits the body of the generated constructor call.
pub fn emit(root: &Node) -> String {
    emit_node(root, 0)
}
