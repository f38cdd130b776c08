//! Top-level declaration generation.

use crate::error::CodegenError;
use crate::java::{EnumGenerator, RecordGenerator};
use splicegen_schema::TypeDefinition;

/// Renders the top-level definitions of one generation run.
///
/// Nested definitions are skipped here; their enclosing definition owns them.
pub struct Generator<'a> {
    definitions: &'a [TypeDefinition],
}

impl<'a> Generator<'a> {
    /// Creates a new generator over the definitions of a run.
    #[must_use]
    pub fn new(definitions: &'a [TypeDefinition]) -> Self {
        Self { definitions }
    }

    /// Returns the definitions that are emitted, in model order.
    pub fn top_level(&self) -> impl Iterator<Item = &'a TypeDefinition> {
        self.definitions.iter().filter(|d| d.is_top_level())
    }

    /// Generates all top-level declarations.
    ///
    /// # Errors
    /// Returns `CodegenError` if any declaration fails to render. No partial
    /// output is returned.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        for definition in self.definitions {
            if !definition.is_top_level() {
                tracing::debug!(
                    "Skipping nested definition {} (parent {:?})",
                    definition.name(),
                    definition.parent()
                );
                continue;
            }
            tracing::debug!("Rendering {}", definition.name());
            match definition {
                TypeDefinition::Struct(s) => output.push_str(&RecordGenerator::new(s).generate()?),
                TypeDefinition::Enum(e) => output.push_str(&EnumGenerator::new(e).generate()),
            }
        }

        Ok(output)
    }
}
