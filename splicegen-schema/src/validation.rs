//! Model validation utilities.
//!
//! The generator itself trusts its input. These checks are run by callers
//! before generation to catch models that would emit clashing Java names.

use crate::error::SchemaError;
use crate::types::{EnumDefinition, StructDefinition, TypeDefinition};
use std::collections::HashSet;

/// Validates the definitions of one generation run.
///
/// # Errors
/// Returns `SchemaError` on duplicate names, empty identifiers or parent
/// references to definitions missing from the run.
pub fn validate_definitions(definitions: &[TypeDefinition]) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for definition in definitions {
        if definition.name().is_empty() {
            return Err(SchemaError::empty_identifier("definition name"));
        }
        if !seen.insert(definition.name()) {
            return Err(SchemaError::DuplicateDefinition {
                name: definition.name().to_string(),
            });
        }
    }

    for definition in definitions {
        if let Some(parent) = definition.parent().filter(|p| !p.is_empty()) {
            if !seen.contains(parent) {
                return Err(SchemaError::UnknownParent {
                    name: definition.name().to_string(),
                    parent: parent.to_string(),
                });
            }
        }
        match definition {
            TypeDefinition::Struct(s) => validate_struct(s)?,
            TypeDefinition::Enum(e) => validate_enum(e)?,
        }
    }

    Ok(())
}

/// Validates a struct definition.
fn validate_struct(def: &StructDefinition) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for field in &def.fields {
        if field.name.is_empty() {
            return Err(SchemaError::empty_identifier(format!(
                "field of '{}'",
                def.name
            )));
        }
        if field.type_name.is_empty() {
            return Err(SchemaError::empty_identifier(format!(
                "type of field '{}.{}'",
                def.name, field.name
            )));
        }
        if !seen_names.insert(&field.name) {
            return Err(SchemaError::duplicate_member(&def.name, &field.name));
        }
    }

    Ok(())
}

/// Validates an enum definition.
fn validate_enum(def: &EnumDefinition) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for value in &def.values {
        if value.name.is_empty() {
            return Err(SchemaError::empty_identifier(format!(
                "value of '{}'",
                def.name
            )));
        }
        if !seen_names.insert(&value.name) {
            return Err(SchemaError::duplicate_member(&def.name, &value.name));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EnumValue, StructField};

    fn fog() -> StructDefinition {
        let mut def = StructDefinition::new("FogOptions");
        def.add_field(StructField::new("float", "distance", "0.0"));
        def.add_field(StructField::new("float", "density", "0.1"));
        def
    }

    #[test]
    fn test_valid_definitions() {
        let mut quality = EnumDefinition::new("QualityLevel");
        quality.add_value(EnumValue::new("LOW"));
        quality.add_value(EnumValue::new("HIGH"));
        let nested = EnumDefinition::new("Mode").with_parent("FogOptions");

        let defs: Vec<TypeDefinition> = vec![fog().into(), quality.into(), nested.into()];
        assert!(validate_definitions(&defs).is_ok());
    }

    #[test]
    fn test_duplicate_definition() {
        let defs: Vec<TypeDefinition> = vec![fog().into(), fog().into()];
        let err = validate_definitions(&defs).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateDefinition { ref name } if name == "FogOptions"));
    }

    #[test]
    fn test_duplicate_field() {
        let mut def = fog();
        def.add_field(StructField::new("float", "distance", "1.0"));
        let err = validate_definitions(&[TypeDefinition::from(def)]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateMember { ref member, .. } if member == "distance"));
    }

    #[test]
    fn test_duplicate_enum_value() {
        let mut def = EnumDefinition::new("QualityLevel");
        def.add_value(EnumValue::new("LOW"));
        def.add_value(EnumValue::new("LOW"));
        let err = validate_definitions(&[TypeDefinition::from(def)]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateMember { .. }));
    }

    #[test]
    fn test_unknown_parent() {
        let nested = StructDefinition::new("Inner").with_parent("Outer");
        let err = validate_definitions(&[TypeDefinition::from(nested)]).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownParent { ref parent, .. } if parent == "Outer"));
    }

    #[test]
    fn test_empty_identifiers() {
        let err = validate_definitions(&[TypeDefinition::from(StructDefinition::new(""))]).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyIdentifier { .. }));

        let mut def = fog();
        def.add_field(StructField::new("", "bias", "0"));
        let err = validate_definitions(&[TypeDefinition::from(def)]).unwrap_err();
        assert!(err.to_string().contains("FogOptions.bias"));
    }
}
