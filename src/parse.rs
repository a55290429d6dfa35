//! Parse Module
//!
//! Markup event source. Markup is parsed as an HTML fragment with html5ever
//! and the resulting DOM is walked into a flat list of open/text/close events,
//! which the tree builder then folds into the element tree.

use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_fragment, Attribute, ParseOpts, QualName};
use log::debug;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::ast::{Ast, Attributes};
use crate::builder::{build, ParseEvent};
use crate::error::Result;

/// Renders an attribute name, keeping a namespace prefix such as `xlink:`.
fn attribute_name(attr: &Attribute) -> String {
    match &attr.name.prefix {
        Some(prefix) => format!("{}:{}", prefix, attr.name.local),
        None => attr.name.local.to_string(),
    }
}

fn collect_attributes(attrs: &[Attribute]) -> Attributes {
    let mut attributes = Attributes::new();
    for attr in attrs {
        attributes
            .entry(attribute_name(attr))
            .or_insert_with(|| attr.value.to_string());
    }
    attributes
}

/// Walk a DOM node depth first, appending its events.
fn walk_node(handle: &Handle, events: &mut Vec<ParseEvent>) {
    match &handle.data {
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            events.push(ParseEvent::Open {
                name: name.local.to_string(),
                attributes: collect_attributes(&attrs.borrow()),
            });

            // <template> keeps its content in a separate fragment.
            if let Some(contents) = template_contents.borrow().as_ref() {
                walk_children(contents, events);
            }
            walk_children(handle, events);

            events.push(ParseEvent::Close);
        }

        NodeData::Text { contents } => {
            events.push(ParseEvent::Text(contents.borrow().to_string()));
        }

        NodeData::Document => walk_children(handle, events),

        NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => {}
    }
}

fn walk_children(handle: &Handle, events: &mut Vec<ParseEvent>) {
    for child in handle.children.borrow().iter() {
        walk_node(child, events);
    }
}

/// Parse markup into the event stream the tree builder consumes.
///
/// Parsing happens in a `<template>` context, so html5ever neither invents
/// `html`/`head`/`body` wrappers nor drops table parts such as `<tr>` or `<td>`
/// that appear without an enclosing `<table>`. Entities are already decoded in
/// the emitted text and attribute values.
pub fn markup_events(markup: &str) -> Vec<ParseEvent> {
    let context = QualName::new(None, ns!(html), local_name!("template"));
    let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new())
        .one(markup);

    let mut events = Vec::new();

    // A fragment parse yields Document -> <html> (the context root) -> content.
    for child in dom.document.children.borrow().iter() {
        match &child.data {
            NodeData::Element { .. } => walk_children(child, &mut events),
            _ => walk_node(child, &mut events),
        }
    }

    events
}

/// Parse markup into the element tree and identifier sets.
pub fn parse(markup: &str) -> Result<Ast> {
    let events = markup_events(markup);
    debug!("markup produced {} parse events", events.len());

    let ast = build(events)?;
    debug!(
        "collected {} element names and {} style names",
        ast.elements.len(),
        ast.styles.len()
    );
    Ok(ast)
}
