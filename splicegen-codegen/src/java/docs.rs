//! Javadoc block formatting.

use super::indent;

/// Formats a documentation string as a Javadoc block at the given depth.
///
/// Multi-line strings are treated as pre-formatted markup and only
/// re-indented. Single-line strings are wrapped in `/** ... */`. In both
/// cases the result ends with the indentation for `depth`, so the caller can
/// place the declaration directly after it. Absent or empty docs produce an
/// empty string.
#[must_use]
pub fn docblock(doc: Option<&str>, depth: usize) -> String {
    let Some(doc) = doc.filter(|d| !d.is_empty()) else {
        return String::new();
    };
    let indent = indent(depth);
    if doc.contains('\n') {
        return doc.replace('\n', &format!("\n{indent}"));
    }
    format!("/**\n{indent} * {doc}\n{indent} */\n{indent}")
}
