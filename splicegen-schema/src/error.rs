//! Error types for model loading and validation.

use thiserror::Error;

/// Error type for model loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested generation run is not present in the model.
    #[error("generation run '{run}' not found in model")]
    UnknownRun {
        /// Run identifier.
        run: String,
    },
}

/// Error type for model validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two definitions in the same run share a name.
    #[error("duplicate definition '{name}'")]
    DuplicateDefinition {
        /// Definition name.
        name: String,
    },

    /// Two members of a definition share a name.
    #[error("duplicate member '{member}' in '{definition}'")]
    DuplicateMember {
        /// Enclosing definition name.
        definition: String,
        /// Member name.
        member: String,
    },

    /// A nested definition names a parent that does not exist.
    #[error("definition '{name}' references unknown parent '{parent}'")]
    UnknownParent {
        /// Definition name.
        name: String,
        /// Referenced parent name.
        parent: String,
    },

    /// An identifier is empty.
    #[error("empty identifier in {context}")]
    EmptyIdentifier {
        /// Where the empty identifier was found.
        context: String,
    },
}

impl SchemaError {
    /// Creates a duplicate member error.
    pub fn duplicate_member(definition: impl Into<String>, member: impl Into<String>) -> Self {
        Self::DuplicateMember {
            definition: definition.into(),
            member: member.into(),
        }
    }

    /// Creates an empty identifier error.
    pub fn empty_identifier(context: impl Into<String>) -> Self {
        Self::EmptyIdentifier {
            context: context.into(),
        }
    }
}
