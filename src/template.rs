//! Module Template
//!
//! Wraps an emitted call-expression body in a complete component module and
//! holds the options controlling the class name and style import source.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::names::lower_first;

pub const DEFAULT_COMPONENT_NAME: &str = "YourComponentName";
pub const DEFAULT_STYLE_LIBRARY: &str = "YourStyleLibrary";

const DOM_MODULE: &str = "ts-mini/dom";
const TSS_MODULE: &str = "ts-mini/tss";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(default, rename_all = "camelCase")]
pub struct TranspileOptions {
    /// Component class name. Defaults to `YourComponentName`.
    pub name: Option<String>,
    /// Module the style identifiers are imported from. Defaults to `YourStyleLibrary`.
    pub style_library: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl TranspileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_style_library(mut self, style_library: impl Into<String>) -> Self {
        self.style_library = Some(style_library.into());
        self
    }

    /// Decode options from the JSON object a JS host passes, e.g.
    /// `{"name": "UserCard", "styleLibrary": "./styles"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Empty strings fall back to the default just like a missing name.
    pub fn component_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(DEFAULT_COMPONENT_NAME)
    }

    pub fn style_library(&self) -> &str {
        non_empty(&self.style_library).unwrap_or(DEFAULT_STYLE_LIBRARY)
    }
}

/// Render the full module around `body`.
///
/// `elements` and `styles` are already-joined, sanitized import lists.
pub fn render_module(
    styles: &str,
    elements: &str,
    body: &str,
    options: &TranspileOptions,
) -> Result<String> {
    let name = options.component_name();
    let style_library = options.style_library();
    let instance = lower_first(name)?;

    Ok(format!(
        r#"
import {{ {elements} }} from "{DOM_MODULE}"
import {{ globalStyles }} from "{TSS_MODULE}"
import {{ {styles} }}
    from "{style_library}"

class {name} extends HTMLElement {{
    constructor() {{
        super();

        shadow(this, globalStyles(),
{body}
        );
    }}
}}
export const {instance} = cpt<{name}>({name});
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = TranspileOptions::default();
        assert_eq!(options.component_name(), "YourComponentName");
        assert_eq!(options.style_library(), "YourStyleLibrary");
    }

    #[test]
    fn test_empty_strings_use_defaults() {
        let options = TranspileOptions::new().with_name("").with_style_library("");
        assert_eq!(options.component_name(), "YourComponentName");
        assert_eq!(options.style_library(), "YourStyleLibrary");
    }

    #[test]
    fn test_from_json() {
        let options =
            TranspileOptions::from_json(r#"{"name": "UserCard", "styleLibrary": "./styles"}"#)
                .unwrap();
        assert_eq!(options.component_name(), "UserCard");
        assert_eq!(options.style_library(), "./styles");

        let options = TranspileOptions::from_json("{}").unwrap();
        assert_eq!(options, TranspileOptions::default());

        assert!(TranspileOptions::from_json("[1]").is_err());
    }

    #[test]
    fn test_render_module_layout() {
        let options = TranspileOptions::new()
            .with_name("MyCard")
            .with_style_library("./card.styles");
        let out = render_module("a, b", "cpt, shadow, div", "            div()", &options).unwrap();
        let expected = r#"
import { cpt, shadow, div } from "ts-mini/dom"
import { globalStyles } from "ts-mini/tss"
import { a, b }
    from "./card.styles"

class MyCard extends HTMLElement {
    constructor() {
        super();

        shadow(this, globalStyles(),
            div()
        );
    }
}
export const myCard = cpt<MyCard>(MyCard);
"#;
        assert_eq!(out, expected);
    }
}
