//! Tree Builder
//!
//! Folds a stream of parse events into the element tree while collecting the
//! element and style identifier sets. The builder is a passive consumer: it
//! trusts the event source to hand it normalized markup.

use crate::ast::{Ast, Attributes, IdentifierSet, Node, SEEDED_ELEMENTS};
use crate::error::{Result, TranspileError};
use log::trace;

/// One event from the markup event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Open { name: String, attributes: Attributes },
    Text(String),
    Close,
}

impl ParseEvent {
    pub fn open<I, K, V>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        ParseEvent::Open {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        ParseEvent::Text(content.into())
    }
}

/// Splits a `class` attribute value into its non-empty tokens.
pub fn class_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

pub struct TreeBuilder {
    /// Open nodes, root at the bottom. The last entry is the current node.
    stack: Vec<Node>,
    styles: IdentifierSet,
    elements: IdentifierSet,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![Node::root()],
            styles: IdentifierSet::new(),
            elements: IdentifierSet::seeded(&SEEDED_ELEMENTS),
        }
    }

    pub fn push(&mut self, event: ParseEvent) -> Result<()> {
        trace!("builder event: {:?}", event);
        match event {
            ParseEvent::Open { name, attributes } => self.open(name, attributes),
            ParseEvent::Text(content) => self.text(content),
            ParseEvent::Close => self.close()?,
        }
        Ok(())
    }

    fn open(&mut self, name: String, attributes: Attributes) {
        let name = name.to_lowercase();
        self.elements.insert(&name);

        if let Some(class) = attributes.get("class") {
            for token in class_tokens(class) {
                self.styles.insert(token);
            }
        }

        self.stack.push(Node::tag(name, attributes));
    }

    fn text(&mut self, content: String) {
        if content.trim().is_empty() {
            return;
        }
        self.current().push_child(Node::text(content));
    }

    fn close(&mut self) -> Result<()> {
        if self.stack.len() <= 1 {
            return Err(TranspileError::UnbalancedClose);
        }
        if let Some(closed) = self.stack.pop() {
            self.current().push_child(closed);
        }
        Ok(())
    }

    fn current(&mut self) -> &mut Node {
        // The root is never popped, so the stack is never empty.
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Closes anything still open and returns the finished tree.
    pub fn finish(mut self) -> Ast {
        while self.stack.len() > 1 {
            if let Some(closed) = self.stack.pop() {
                self.current().push_child(closed);
            }
        }
        let root = self.stack.pop().unwrap_or_else(Node::root);

        Ast {
            root,
            styles: self.styles,
            elements: self.elements,
        }
    }
}

/// Folds a complete event stream into an [`Ast`].
pub fn build<I>(events: I) -> Result<Ast>
where
    I: IntoIterator<Item = ParseEvent>,
{
    let mut builder = TreeBuilder::new();
    for event in events {
        builder.push(event)?;
    }
    Ok(builder.finish())
}
