//! # Splicegen
//!
//! Generates Java data-holder classes and enums from a language-neutral model
//! of native type definitions, and splices them into existing Java sources
//! below a marker line without touching the hand-written code above it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use splicegen::prelude::*;
//! use std::path::Path;
//!
//! let model = parse_model_file(Path::new("view.json"))?;
//! let definitions = model.run("View")?;
//! validate_definitions(definitions)?;
//!
//! let report = JavaEditor::default().edit(definitions, "View", Path::new("src/main/java"))?;
//! println!("Edited {}", report.path.display());
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type model, JSON loading and validation
//! - [`codegen`] - Java rendering and marker-based merging

pub mod cli;
pub mod prelude;

/// Type model, loading and validation.
pub mod schema {
    pub use splicegen_schema::*;
}

/// Java code generation and file merging.
pub mod codegen {
    pub use splicegen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use splicegen_codegen::{
    CodegenError, EditReport, Generator, JavaEditor, MergeOptions, edit_java, generate_java,
};
pub use splicegen_schema::{TypeDefinition, TypeModel, parse_model, parse_model_file};
