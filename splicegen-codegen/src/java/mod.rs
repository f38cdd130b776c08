//! Java code generation modules.
//!
//! The helpers here turn native (C++) type names and default values into
//! Java declarations. Every helper is a pure function of its field.

pub mod annotations;
pub mod docs;
pub mod enums;
pub mod mapping;
pub mod records;

pub use annotations::{annotation, annotation_block};
pub use docs::docblock;
pub use enums::EnumGenerator;
pub use mapping::{java_type, java_value};
pub use records::RecordGenerator;

/// Width of one indentation level in generated code.
pub const INDENT: &str = "    ";

/// Returns the indentation for the given nesting depth.
#[must_use]
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}
