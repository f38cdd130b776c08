//! Prelude module for convenient imports.
//!
//! ```ignore
//! use splicegen::prelude::*;
//! ```

// Model types
pub use splicegen_schema::{
    EnumDefinition, EnumValue, FieldFlags, ParseError, SchemaError, SourceType, StructDefinition,
    StructField, TypeDefinition, TypeModel, parse_model, parse_model_file, validate_definitions,
};

// Generation types
pub use splicegen_codegen::{
    CodegenError, EditReport, Generator, JavaEditor, MergeOptions, edit_java, generate_java,
};
