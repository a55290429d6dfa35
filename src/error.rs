//! Error types for the transpiler.

use thiserror::Error;

/// Errors surfaced by the transpiler pipeline.
///
/// Markup itself is never rejected; these only fire on a malformed event
/// stream fed directly to the builder, or on an unusable component name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranspileError {
    /// A close event arrived while only the root was open.
    #[error("unbalanced close event: no open tag to close")]
    UnbalancedClose,

    /// An empty name was given where a first character is required.
    #[error("cannot derive an identifier from an empty name")]
    EmptyName,

    /// Component options could not be decoded.
    #[error("invalid transpile options: {0}")]
    InvalidOptions(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TranspileError>;

impl From<serde_json::Error> for TranspileError {
    fn from(err: serde_json::Error) -> Self {
        TranspileError::InvalidOptions(err.to_string())
    }
}
