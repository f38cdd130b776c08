//! Record (static nested class) code generation.

use super::{annotation_block, docblock, indent, java_type, java_value};
use crate::error::CodegenError;
use splicegen_schema::{StructDefinition, StructField};

/// Generator for a Java data-holder class.
pub struct RecordGenerator<'a> {
    def: &'a StructDefinition,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    #[must_use]
    pub fn new(def: &'a StructDefinition) -> Self {
        Self { def }
    }

    /// Generates the class declaration.
    ///
    /// # Errors
    /// Returns `CodegenError` if any field default cannot be mapped.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&indent(1));
        output.push_str(&docblock(self.def.doc.as_deref(), 1));
        output.push_str(&format!("public static class {} {{\n", self.def.name));

        for field in &self.def.fields {
            output.push_str(&self.generate_field(field)?);
        }

        output.push_str(&indent(1));
        output.push_str("}\n");

        Ok(output)
    }

    /// Generates a single field declaration with its initializer.
    fn generate_field(&self, field: &StructField) -> Result<String, CodegenError> {
        let mut output = String::new();

        output.push_str(&indent(2));
        output.push_str(&docblock(field.doc.as_deref(), 2));
        output.push_str(&annotation_block(field, 2));
        output.push_str(&format!(
            "public {} {} = {};\n",
            java_type(field),
            field.name,
            java_value(field)?
        ));

        Ok(output)
    }
}
