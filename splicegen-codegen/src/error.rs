//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Model loading error.
    #[error("model parse error: {0}")]
    Parse(#[from] splicegen_schema::ParseError),

    /// Model validation error.
    #[error("schema error: {0}")]
    Schema(#[from] splicegen_schema::SchemaError),

    /// The target file has no marker line.
    #[error("unable to find marker line in {}", .path.display())]
    MarkerNotFound {
        /// Target file path.
        path: PathBuf,
    },

    /// The marker text is empty or blank and would match any line.
    #[error("invalid marker {marker:?}: marker text must not be blank")]
    InvalidMarker {
        /// Marker text.
        marker: String,
    },

    /// A default value could not be mapped to a Java literal.
    #[error("malformed default value '{value}' for field '{field}'")]
    MalformedDefault {
        /// Field name.
        field: String,
        /// Default value text.
        value: String,
    },

    /// Reading or writing the target file failed.
    #[error("failed to access {}: {source}", .path.display())]
    Target {
        /// Target file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates a target file error for the given path.
    pub fn target(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Target {
            path: path.into(),
            source,
        }
    }

    /// Creates a malformed default value error.
    pub fn malformed_default(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedDefault {
            field: field.into(),
            value: value.into(),
        }
    }
}
