//! # Splicegen Codegen
//!
//! Java code generation from the splicegen type model.
//!
//! This crate provides:
//! - Native type and default value mapping to Java
//! - Nullability and size annotation inference
//! - Javadoc formatting
//! - Record and enum declaration rendering
//! - Marker-based merging into hand-written Java files

pub mod error;
pub mod generator;
pub mod java;
pub mod merge;

pub use error::CodegenError;
pub use generator::Generator;
pub use merge::{EditReport, JavaEditor, MergeOptions};

use splicegen_schema::TypeDefinition;
use std::path::Path;

/// Generates Java declarations for the top-level definitions of a run.
///
/// # Errors
/// Returns `CodegenError` if any declaration fails to render.
pub fn generate_java(definitions: &[TypeDefinition]) -> Result<String, CodegenError> {
    Generator::new(definitions).generate()
}

/// Regenerates `{folder}/{class_name}.java` with the default merge options.
///
/// # Errors
/// Returns `CodegenError` if the target cannot be read or written, lacks the
/// marker line, or a declaration fails to render.
pub fn edit_java(
    definitions: &[TypeDefinition],
    class_name: &str,
    folder: &Path,
) -> Result<EditReport, CodegenError> {
    JavaEditor::default().edit(definitions, class_name, folder)
}

/// Loads a JSON model file and regenerates the Java file for one run.
///
/// # Arguments
/// * `model_path` - Path to the serialized type model
/// * `run` - Generation run identifier
/// * `class_name` - Target class (file name without extension)
/// * `folder` - Folder containing the target file
///
/// # Errors
/// Returns `CodegenError` if loading, validation, rendering or the edit fails.
pub fn edit_from_model_file(
    model_path: &Path,
    run: &str,
    class_name: &str,
    folder: &Path,
) -> Result<EditReport, CodegenError> {
    let model = splicegen_schema::parse_model_file(model_path)?;
    let definitions = model.run(run)?;
    splicegen_schema::validate_definitions(definitions)?;
    edit_java(definitions, class_name, folder)
}
