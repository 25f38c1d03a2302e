//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Catalog parsing error.
    #[error("catalog parse error: {0}")]
    Parse(#[from] blockgen_schema::ParseError),

    /// Catalog validation error.
    #[error("catalog error: {0}")]
    Schema(#[from] blockgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
