//! JSON model loader.
//!
//! The annotation parser that scans the native headers serializes its output
//! as JSON; this module turns that document back into a [`TypeModel`].

use crate::error::ParseError;
use crate::model::TypeModel;
use std::path::Path;

/// Parses a type model from a JSON string.
///
/// # Arguments
/// * `json` - Serialized model content
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or does not match the model.
pub fn parse_model(json: &str) -> Result<TypeModel, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a type model from a JSON file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_model_file(path: &Path) -> Result<TypeModel, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_model(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SourceType, TypeDefinition};

    const VIEW_MODEL: &str = r#"{
        "runs": {
            "View": [
                {
                    "kind": "struct",
                    "name": "FogOptions",
                    "doc": "Options to control large-scale fog in the scene",
                    "fields": [
                        {"type": "float", "name": "distance", "default": "0.0"},
                        {"type": "LinearColor", "name": "color", "default": "[1.0, 1.0, 1.0]"},
                        {"type": "math::float3", "name": "scale", "default": "[1, 1, 1]",
                         "flags": ["java_float", "opaque"]}
                    ]
                },
                {
                    "kind": "enum",
                    "name": "QualityLevel",
                    "values": [{"name": "LOW"}, {"name": "HIGH", "doc": "Best."}]
                },
                {
                    "kind": "enum",
                    "name": "Mode",
                    "parent": "FogOptions",
                    "values": [{"name": "A"}]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_model() {
        let model = parse_model(VIEW_MODEL).expect("Failed to parse");
        let defs = model.get_run("View").expect("missing run");
        assert_eq!(defs.len(), 3);

        let TypeDefinition::Struct(fog) = &defs[0] else {
            panic!("expected struct");
        };
        assert_eq!(fog.fields.len(), 3);
        assert_eq!(fog.fields[1].source_type(), SourceType::LinearColor);
        assert!(fog.fields[2].is_scalar_override());
        assert!(!fog.fields[0].is_scalar_override());

        assert!(defs[1].is_enum());
        assert!(defs[1].is_top_level());
        assert!(!defs[2].is_top_level());
    }

    #[test]
    fn test_parse_missing_defaults() {
        let json = r#"{"runs": {"R": [{"kind": "struct", "name": "S",
            "fields": [{"type": "int", "name": "x"}]}]}}"#;
        let model = parse_model(json).expect("Failed to parse");
        let TypeDefinition::Struct(s) = &model.get_run("R").unwrap()[0] else {
            panic!("expected struct");
        };
        assert_eq!(s.fields[0].default_value, "");
        assert!(s.fields[0].flags.is_empty());
        assert!(s.doc.is_none());
    }

    #[test]
    fn test_parse_skips_unsupported_kind() {
        let json = r#"{"runs": {"R": [
            {"kind": "union", "name": "U", "members": []},
            {"kind": "enum", "name": "E"}
        ]}}"#;
        let model = parse_model(json).expect("Failed to parse");
        let defs = model.get_run("R").unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name(), "E");
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(parse_model("{\"runs\": 3}"), Err(ParseError::Json(_))));
        assert!(matches!(parse_model("not json"), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_model_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model.json");
        std::fs::write(&path, VIEW_MODEL).expect("write");

        let model = parse_model_file(&path).expect("Failed to parse");
        assert!(model.get_run("View").is_some());

        let missing = parse_model_file(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(ParseError::Io(_))));
    }
}
