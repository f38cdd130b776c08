//! # Splicegen Schema
//!
//! Language-neutral type model consumed by the splicegen code generator.
//!
//! This crate provides:
//! - Struct and enum definitions with fields, values and documentation
//! - Classification of declared source types
//! - A JSON loader for serialized models
//! - Model validation

pub mod error;
pub mod model;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use model::TypeModel;
pub use parser::{parse_model, parse_model_file};
pub use types::{
    EnumDefinition, EnumValue, FieldFlags, SourceType, StructDefinition, StructField,
    TypeDefinition,
};
pub use validation::validate_definitions;
