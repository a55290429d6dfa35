//! Tree and identifier-set types produced by the builder.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Attribute name → raw value, in source order.
pub type Attributes = IndexMap<String, String>;

/// Element constructors every generated module imports.
pub const SEEDED_ELEMENTS: [&str; 2] = ["cpt", "shadow"];

/// A node of the element tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    Root {
        children: Vec<Node>,
    },
    Tag {
        name: String,
        attributes: Attributes,
        children: Vec<Node>,
    },
    Text {
        value: String,
    },
}

impl Node {
    pub fn root() -> Self {
        Node::Root {
            children: Vec::new(),
        }
    }

    pub fn tag(name: impl Into<String>, attributes: Attributes) -> Self {
        Node::Tag {
            name: name.into(),
            attributes,
            children: Vec::new(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Children of a root or tag node; text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children } | Node::Tag { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Appends `child`. Text nodes cannot hold children, so this is a no-op for them.
    pub(crate) fn push_child(&mut self, child: Node) {
        match self {
            Node::Root { children } | Node::Tag { children, .. } => children.push(child),
            Node::Text { .. } => {}
        }
    }
}

/// Distinct names collected during the parse, in first-seen order.
///
/// Only grows: there is no removal API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdentifierSet(IndexSet<String>);

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(names: &[&str]) -> Self {
        let mut set = Self::new();
        for name in names {
            set.insert(name);
        }
        set
    }

    /// Returns `true` if the name was not present yet.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.0.contains(name) {
            false
        } else {
            self.0.insert(name.to_owned())
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Everything one parse pass yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ast {
    pub root: Node,
    pub styles: IdentifierSet,
    pub elements: IdentifierSet,
}
