//! Native type and literal mapping to Java.

use crate::error::CodegenError;
use splicegen_schema::{SourceType, StructField};

/// Native null pointer literal.
pub const NULL_POINTER: &str = "nullptr";

/// Native scope separator.
pub const SCOPE_SEPARATOR: &str = "::";

/// Maps the declared type of a field to a Java type name.
///
/// Unsigned integers of every width collapse to `int`, and pointer markers
/// are dropped since nullability is carried by annotations instead.
#[must_use]
pub fn java_type(field: &StructField) -> String {
    if field.is_scalar_override() {
        return "float".to_string();
    }
    match field.source_type() {
        st if st.is_vector() => "float[]".to_string(),
        SourceType::Bool => "boolean".to_string(),
        st if st.is_unsigned() => "int".to_string(),
        _ => field.type_name.replace('*', ""),
    }
}

/// Maps the default value of a field to a Java literal.
///
/// # Errors
/// Returns `CodegenError::MalformedDefault` if the default value is empty
/// or, for scalar overrides, has no first component.
pub fn java_value(field: &StructField) -> Result<String, CodegenError> {
    let malformed = || CodegenError::malformed_default(&field.name, &field.default_value);

    if field.is_scalar_override() {
        let contents = field
            .default_value
            .trim_matches(|c: char| matches!(c, ' ' | '[' | ']'));

        // Only the first component survives the collapse to a scalar.
        let first = contents.split_once(',').map_or(contents, |(head, _)| head);
        if first.is_empty() {
            return Err(malformed());
        }
        return Ok(first.to_string());
    }

    if field.default_value.trim().is_empty() {
        return Err(malformed());
    }
    if field.default_value == NULL_POINTER {
        return Ok("null".to_string());
    }

    let mut value = field.default_value.replace(SCOPE_SEPARATOR, ".");
    if field.source_type() == SourceType::Float {
        value.push('f');
    } else if value.len() > 1 && value.starts_with('[') && value.ends_with(']') {
        value = format!("{{{}}}", &value[1..value.len() - 1]);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use splicegen_schema::FieldFlags;

    fn field(type_name: &str, default_value: &str) -> StructField {
        StructField::new(type_name, "value", default_value)
    }

    fn scalar(type_name: &str, default_value: &str) -> StructField {
        field(type_name, default_value).with_flags(FieldFlags::scalar_override())
    }

    #[test]
    fn test_java_type_vocabulary() {
        let cases = [
            ("math::float2", "float[]"),
            ("math::float3", "float[]"),
            ("math::float4", "float[]"),
            ("LinearColor", "float[]"),
            ("LinearColorA", "float[]"),
            ("bool", "boolean"),
            ("uint8_t", "int"),
            ("uint16_t", "int"),
            ("uint32_t", "int"),
            ("float", "float"),
            ("Texture*", "Texture"),
            ("BlendMode", "BlendMode"),
        ];
        for (native, java) in cases {
            assert_eq!(java_type(&field(native, "0")), java, "type {native}");
        }
    }

    #[test]
    fn test_java_type_scalar_override() {
        assert_eq!(java_type(&scalar("math::float3", "[1, 1, 1]")), "float");
        assert_eq!(java_type(&scalar("bool", "true")), "float");
    }

    #[test]
    fn test_java_value_scalar_override_takes_first() {
        assert_eq!(java_value(&scalar("math::float3", "[1,2,3]")).unwrap(), "1");
        assert_eq!(java_value(&scalar("math::float3", "[0.5, 2, 3]")).unwrap(), "0.5");
        assert_eq!(java_value(&scalar("math::float3", "[4]")).unwrap(), "4");
        assert_eq!(java_value(&scalar("float", "2.0")).unwrap(), "2.0");
    }

    #[test]
    fn test_java_value_scalar_override_empty() {
        let err = java_value(&scalar("math::float3", "[]")).unwrap_err();
        assert!(matches!(err, CodegenError::MalformedDefault { .. }));
    }

    #[test]
    fn test_java_value_null() {
        assert_eq!(java_value(&field("Texture*", "nullptr")).unwrap(), "null");
    }

    #[test]
    fn test_java_value_scoped_name() {
        assert_eq!(java_value(&field("Foo", "Foo::BAR")).unwrap(), "Foo.BAR");
        assert_eq!(
            java_value(&field("BlendMode", "View::BlendMode::OPAQUE")).unwrap(),
            "View.BlendMode.OPAQUE"
        );
    }

    #[test]
    fn test_java_value_float_suffix() {
        assert_eq!(java_value(&field("float", "1.5")).unwrap(), "1.5f");
    }

    #[test]
    fn test_java_value_array_brackets() {
        assert_eq!(
            java_value(&field("math::float3", "[1.0, 2.0, 3.0]")).unwrap(),
            "{1.0, 2.0, 3.0}"
        );
        assert_eq!(java_value(&field("math::float2", "[]")).unwrap(), "{}");
        assert_eq!(java_value(&field("int", "[")).unwrap(), "[");
    }

    #[test]
    fn test_java_value_passthrough() {
        assert_eq!(java_value(&field("bool", "true")).unwrap(), "true");
        assert_eq!(java_value(&field("uint32_t", "16")).unwrap(), "16");
    }

    #[test]
    fn test_java_value_empty_default() {
        let err = java_value(&field("int", "")).unwrap_err();
        assert!(err.to_string().contains("'value'"));
    }
}
