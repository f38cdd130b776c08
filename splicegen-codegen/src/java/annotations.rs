//! Nullability and size annotation inference.

use super::indent;
use super::mapping::{NULL_POINTER, SCOPE_SEPARATOR};
use splicegen_schema::{SourceType, StructField};

/// Infers the Java annotation for a field.
///
/// Rules are checked in a fixed order and the first match wins, so a
/// `nullptr` default is `@Nullable` whatever the declared type.
#[must_use]
pub fn annotation(field: &StructField) -> Option<&'static str> {
    if field.is_scalar_override() {
        return None;
    }
    if field.default_value == NULL_POINTER {
        return Some("@Nullable");
    }
    match field.source_type() {
        SourceType::Float2 => Some("@NonNull @Size(min = 2)"),
        SourceType::Float3 | SourceType::LinearColor => Some("@NonNull @Size(min = 3)"),
        SourceType::Float4 | SourceType::LinearColorA => Some("@NonNull @Size(min = 4)"),
        _ if field.default_value.contains(SCOPE_SEPARATOR) => Some("@NonNull"),
        _ => None,
    }
}

/// Returns the annotation followed by a line break and the indentation for
/// `depth`, or an empty string when the field has no annotation.
#[must_use]
pub fn annotation_block(field: &StructField, depth: usize) -> String {
    annotation(field).map_or_else(String::new, |a| format!("{a}\n{}", indent(depth)))
}
