//! # Markup Transpiler
//!
//! Compiles an HTML fragment into a `ts-mini` component module: every element
//! becomes a call to its element constructor, text becomes a template
//! literal, and the whole tree is handed to `shadow(...)` inside a generated
//! `HTMLElement` subclass.
//!
//! ## Pipeline
//!
//! 1. **Parse**: html5ever turns markup into open/text/close events.
//! 2. **Build**: the events are folded into a tree while element names and
//!    `class` tokens are collected for the import lists.
//! 3. **Emit**: the tree is lowered into indented nested calls.
//! 4. **Wrap**: the calls are placed into the module template.
//!
//! Each stage runs to completion before the next starts and all state is
//! local to one call, so [`transpile`] can be used from any thread.
//!
//! ```
//! use markup_transpiler::{transpile, TranspileOptions};
//!
//! let options = TranspileOptions::new().with_name("UserCard");
//! let module = transpile(r#"<div class="card">Hi</div>"#, &options).unwrap();
//! assert!(module.contains("class UserCard extends HTMLElement"));
//! ```

#[cfg(feature = "napi")]
use napi_derive::napi;

use log::debug;

pub mod ast;
pub mod builder;
pub mod emit;
pub mod error;
pub mod names;
pub mod parse;
pub mod template;


pub use ast::{Ast, IdentifierSet, Node};
pub use builder::{build, ParseEvent, TreeBuilder};
pub use error::{Result, TranspileError};
pub use parse::{markup_events, parse};
pub use template::TranspileOptions;

/// Lower an already-built tree into a full module.
pub fn compile(ast: &Ast, options: &TranspileOptions) -> Result<String> {
    let styles = names::import_list(ast.styles.iter());
    let elements = names::import_list(ast.elements.iter());
    let body = emit::emit(&ast.root);
    debug!("emitted {} bytes of component body", body.len());

    template::render_module(&styles, &elements, &body, options)
}

/// Transpile markup into a component module.
pub fn transpile(markup: &str, options: &TranspileOptions) -> Result<String> {
    let ast = parse(markup)?;
    compile(&ast, options)
}

pub use self::transpile as transpile_html;

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn transpile_native(markup: String, options: Option<TranspileOptions>) -> napi::Result<String> {
    transpile(&markup, &options.unwrap_or_default())
        .map_err(|e| napi::Error::from_reason(e.to_string()))
}

#[cfg(feature = "napi")]
#[napi]
pub fn parse_native(markup: String) -> napi::Result<serde_json::Value> {
    let ast = parse(&markup).map_err(|e| napi::Error::from_reason(e.to_string()))?;
    serde_json::to_value(ast).map_err(|e| napi::Error::from_reason(e.to_string()))
}
