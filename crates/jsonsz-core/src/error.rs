//! Error types for JSON object mapping.
//!
//! Only top-level input problems and configuration problems are errors by
//! default. Field-level type mismatches are skipped unless the caller opts into
//! [`MismatchPolicy::Fail`](crate::MismatchPolicy::Fail).

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while decoding or encoding a mappable type.
#[derive(Debug, Error)]
pub enum MappingError {
    /// JSON text could not be parsed.
    #[error("Failed to parse JSON text: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level input has the wrong shape for the entry point.
    #[error("Unexpected JSON input: expected {expected}, got {actual}")]
    UnexpectedInput {
        expected: &'static str,
        actual: &'static str,
    },

    /// A field value has the wrong runtime shape for its declared type.
    #[error("Type mismatch at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Mapping configuration file could not be read.
    #[error("Failed to read mapping configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Mapping configuration could not be parsed.
    #[error("Invalid mapping configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

/// Short name of a JSON value's runtime shape, used in diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
