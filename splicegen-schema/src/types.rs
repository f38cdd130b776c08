//! Type model definitions.
//!
//! This module contains the data structures describing the language-neutral
//! type model: struct and enum definitions, their fields and values, and the
//! classification of declared source types.

use serde::{Deserialize, Serialize};

/// Flag token that forces a vector field to be exposed as a single float.
pub const SCALAR_OVERRIDE: &str = "scalar_override";

/// Legacy spelling of [`SCALAR_OVERRIDE`] emitted by older annotation parsers.
pub const SCALAR_OVERRIDE_LEGACY: &str = "java_float";

/// Type definition variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDefinition {
    /// Record (data holder) definition.
    Struct(StructDefinition),
    /// Enumeration definition.
    Enum(EnumDefinition),
}

impl TypeDefinition {
    /// Returns the base name of the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(s) => &s.name,
            Self::Enum(e) => &e.name,
        }
    }

    /// Returns the enclosing definition name, if nested.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        match self {
            Self::Struct(s) => s.parent.as_deref(),
            Self::Enum(e) => e.parent.as_deref(),
        }
    }

    /// Returns the documentation string, if any.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        match self {
            Self::Struct(s) => s.doc.as_deref(),
            Self::Enum(e) => e.doc.as_deref(),
        }
    }

    /// Returns true if the definition has no enclosing parent.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.parent().is_none_or(str::is_empty)
    }

    /// Returns true if this is a struct definition.
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Returns true if this is an enum definition.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

impl From<StructDefinition> for TypeDefinition {
    fn from(value: StructDefinition) -> Self {
        Self::Struct(value)
    }
}

impl From<EnumDefinition> for TypeDefinition {
    fn from(value: EnumDefinition) -> Self {
        Self::Enum(value)
    }
}

/// Struct (record) definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDefinition {
    /// Base name.
    pub name: String,
    /// Enclosing definition name (None for top-level).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<StructField>,
}

impl StructDefinition {
    /// Creates a new top-level struct definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            doc: None,
            fields: Vec::new(),
        }
    }

    /// Sets the enclosing definition.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the documentation string.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Adds a field to the struct.
    pub fn add_field(&mut self, field: StructField) {
        self.fields.push(field);
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Field within a struct definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    /// Declared source type, e.g. `math::float3` or `Texture*`.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Field name.
    pub name: String,
    /// Default value text as written in the source.
    #[serde(rename = "default", default)]
    pub default_value: String,
    /// Custom flags.
    #[serde(default)]
    pub flags: FieldFlags,
    /// Documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl StructField {
    /// Creates a new field with no flags and no documentation.
    #[must_use]
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            default_value: default_value.into(),
            flags: FieldFlags::default(),
            doc: None,
        }
    }

    /// Sets the field flags.
    #[must_use]
    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the documentation string.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Classifies the declared source type.
    #[must_use]
    pub fn source_type(&self) -> SourceType {
        SourceType::classify(&self.type_name)
    }

    /// Returns true if the field is forced to a scalar float.
    #[must_use]
    pub const fn is_scalar_override(&self) -> bool {
        self.flags.scalar_override
    }
}

/// Custom field capabilities.
///
/// Serialized as a list of string tokens. Only presence matters and tokens
/// other than the known capabilities are dropped on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FieldFlags {
    /// Expose a vector-typed field as a single float.
    pub scalar_override: bool,
}

impl FieldFlags {
    /// Flags with the scalar override capability set.
    #[must_use]
    pub const fn scalar_override() -> Self {
        Self {
            scalar_override: true,
        }
    }

    /// Builds flags from opaque tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = Self::default();
        for token in tokens {
            match token.as_ref() {
                SCALAR_OVERRIDE | SCALAR_OVERRIDE_LEGACY => flags.scalar_override = true,
                _ => {}
            }
        }
        flags
    }

    /// Returns true if no capability is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.scalar_override
    }
}

impl From<Vec<String>> for FieldFlags {
    fn from(tokens: Vec<String>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl From<FieldFlags> for Vec<String> {
    fn from(flags: FieldFlags) -> Self {
        let mut tokens = Vec::new();
        if flags.scalar_override {
            tokens.push(SCALAR_OVERRIDE.to_string());
        }
        tokens
    }
}

/// Enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// Base name.
    pub name: String,
    /// Enclosing definition name (None for top-level).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Values in declaration order.
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl EnumDefinition {
    /// Creates a new top-level enum definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            doc: None,
            values: Vec::new(),
        }
    }

    /// Sets the enclosing definition.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the documentation string.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Adds a value to the enum.
    pub fn add_value(&mut self, value: EnumValue) {
        self.values.push(value);
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl EnumValue {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    /// Sets the documentation string.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Declared source type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// Scalar 32-bit float.
    Float,
    /// Two-component float vector.
    Float2,
    /// Three-component float vector.
    Float3,
    /// Four-component float vector.
    Float4,
    /// RGB linear color.
    LinearColor,
    /// RGBA linear color.
    LinearColorA,
    /// Boolean.
    Bool,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Anything else, passed through by name.
    Other,
}

impl SourceType {
    /// Classifies a declared source type string.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        match name {
            "float" => Self::Float,
            "math::float2" => Self::Float2,
            "math::float3" => Self::Float3,
            "math::float4" => Self::Float4,
            "LinearColor" => Self::LinearColor,
            "LinearColorA" => Self::LinearColorA,
            "bool" => Self::Bool,
            "uint8_t" => Self::Uint8,
            "uint16_t" => Self::Uint16,
            "uint32_t" => Self::Uint32,
            _ => Self::Other,
        }
    }

    /// Returns the component count for vector and color types.
    #[must_use]
    pub const fn components(&self) -> Option<usize> {
        match self {
            Self::Float2 => Some(2),
            Self::Float3 | Self::LinearColor => Some(3),
            Self::Float4 | Self::LinearColorA => Some(4),
            _ => None,
        }
    }

    /// Returns true for vector and color types.
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        self.components().is_some()
    }

    /// Returns true for the unsigned integer widths.
    #[must_use]
    pub const fn is_unsigned(&self) -> bool {
        matches!(self, Self::Uint8 | Self::Uint16 | Self::Uint32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_classify() {
        assert_eq!(SourceType::classify("math::float2"), SourceType::Float2);
        assert_eq!(SourceType::classify("LinearColorA"), SourceType::LinearColorA);
        assert_eq!(SourceType::classify("uint16_t"), SourceType::Uint16);
        assert_eq!(SourceType::classify("Texture*"), SourceType::Other);
        assert_eq!(SourceType::classify("float"), SourceType::Float);
    }

    #[test]
    fn test_source_type_components() {
        assert_eq!(SourceType::Float2.components(), Some(2));
        assert_eq!(SourceType::LinearColor.components(), Some(3));
        assert_eq!(SourceType::Float4.components(), Some(4));
        assert_eq!(SourceType::Bool.components(), None);
        assert!(SourceType::LinearColorA.is_vector());
        assert!(!SourceType::Float.is_vector());
        assert!(SourceType::Uint32.is_unsigned());
    }

    #[test]
    fn test_field_flags_from_tokens() {
        assert!(FieldFlags::from_tokens(["scalar_override"]).scalar_override);
        assert!(FieldFlags::from_tokens(["java_float"]).scalar_override);
        assert!(FieldFlags::from_tokens(["unrelated", "other"]).is_empty());
        assert!(FieldFlags::from_tokens(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_field_flags_into_tokens() {
        let tokens: Vec<String> = FieldFlags::scalar_override().into();
        assert_eq!(tokens, vec!["scalar_override".to_string()]);

        let tokens: Vec<String> = FieldFlags::default().into();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_type_definition_top_level() {
        let top: TypeDefinition = StructDefinition::new("Options").into();
        assert!(top.is_top_level());
        assert!(top.is_struct());

        let nested: TypeDefinition = EnumDefinition::new("Mode").with_parent("Options").into();
        assert!(!nested.is_top_level());
        assert!(nested.is_enum());
        assert_eq!(nested.parent(), Some("Options"));
    }

    #[test]
    fn test_empty_parent_is_top_level() {
        let mut def = StructDefinition::new("Options");
        def.parent = Some(String::new());
        assert!(TypeDefinition::from(def).is_top_level());
    }

    #[test]
    fn test_struct_definition_fields_keep_order() {
        let mut def = StructDefinition::new("Fog");
        def.add_field(StructField::new("float", "distance", "0.0"));
        def.add_field(StructField::new("math::float3", "color", "{1,1,1}"));

        let names: Vec<_> = def.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["distance", "color"]);
        assert_eq!(def.get_field("color").unwrap().source_type(), SourceType::Float3);
        assert!(def.get_field("missing").is_none());
    }

    #[test]
    fn test_enum_definition_values() {
        let mut def = EnumDefinition::new("QualityLevel").with_doc("Quality.");
        def.add_value(EnumValue::new("LOW"));
        def.add_value(EnumValue::new("HIGH").with_doc("Best."));

        assert_eq!(def.values.len(), 2);
        assert_eq!(def.get_value("HIGH").unwrap().doc.as_deref(), Some("Best."));
        assert_eq!(TypeDefinition::from(def).doc(), Some("Quality."));
    }

    #[test]
    fn test_struct_field_scalar_override() {
        let field = StructField::new("math::float3", "scale", "[1, 1, 1]")
            .with_flags(FieldFlags::scalar_override());
        assert!(field.is_scalar_override());
        assert!(!StructField::new("float", "x", "0").is_scalar_override());
    }
}
