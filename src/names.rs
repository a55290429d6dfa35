//! Name and string-literal helpers used by the emitter and the module template.

use crate::error::{Result, TranspileError};
use serde_json::Value;

/// Turns a dashed markup name into a valid identifier (`card-body` → `card_body`).
pub fn sanitize_identifier(name: &str) -> String {
    name.replace('-', "_")
}

/// Sanitizes every name and joins them into an import list.
pub fn import_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(sanitize_identifier)
        .collect::<Vec<_>>()
        .join(", ")
}

fn json_string(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

/// Object key for an attribute: bare unless the name contains a hyphen.
pub fn quote_attribute_name(name: &str) -> String {
    if name.contains('-') {
        json_string(name)
    } else {
        name.to_string()
    }
}

/// Quotes raw text as a backtick template literal.
///
/// JSON escaping handles backslashes and control characters; the JSON quote
/// escapes are then undone because the literal is delimited by backticks, and
/// backticks and `$` are escaped so the text can never open an interpolation.
pub fn quote_string_literal(text: &str) -> String {
    let json = json_string(text);
    let inner = &json[1..json.len() - 1];
    let escaped = inner
        .replace("\\\"", "\"")
        .replace('`', "\\`")
        .replace('$', "\\$");
    format!("`{}`", escaped)
}

/// Lower-cases the first character only (`YourComponentName` → `yourComponentName`).
pub fn lower_first(text: &str) -> Result<String> {
    let mut chars = text.chars();
    let first = chars.next().ok_or(TranspileError::EmptyName)?;
    Ok(first.to_lowercase().chain(chars).collect())
}
