//! Enum code generation.

use super::{docblock, indent};
use splicegen_schema::EnumDefinition;

/// Generator for a Java enum.
pub struct EnumGenerator<'a> {
    def: &'a EnumDefinition,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(def: &'a EnumDefinition) -> Self {
        Self { def }
    }

    /// Generates the enum declaration.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&indent(1));
        output.push_str(&docblock(self.def.doc.as_deref(), 1));
        output.push_str(&format!("public enum {} {{\n", self.def.name));

        for value in &self.def.values {
            output.push_str(&indent(2));
            output.push_str(&docblock(value.doc.as_deref(), 2));
            output.push_str(&format!("{},\n", value.name));
        }

        output.push_str(&indent(1));
        output.push_str("}\n");

        output
    }
}
