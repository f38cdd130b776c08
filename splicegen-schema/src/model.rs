//! Generation-run model.
//!
//! A [`TypeModel`] maps each generation-run identifier to the ordered list of
//! definitions produced for it. The generator consumes one run at a time.

use crate::error::ParseError;
use crate::types::{EnumDefinition, StructDefinition, TypeDefinition};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Type definitions grouped by generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeModel {
    /// Definitions per run, each in model order.
    #[serde(default, deserialize_with = "deserialize_runs")]
    pub runs: BTreeMap<String, Vec<TypeDefinition>>,
}

impl TypeModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a definition to the given run, creating the run if needed.
    pub fn add_definition(
        &mut self,
        run: impl Into<String>,
        definition: impl Into<TypeDefinition>,
    ) {
        self.runs
            .entry(run.into())
            .or_default()
            .push(definition.into());
    }

    /// Gets the definitions of a run.
    #[must_use]
    pub fn get_run(&self, run: &str) -> Option<&[TypeDefinition]> {
        self.runs.get(run).map(Vec::as_slice)
    }

    /// Gets the definitions of a run, failing if it is absent.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownRun` if the run does not exist.
    pub fn run(&self, run: &str) -> Result<&[TypeDefinition], ParseError> {
        self.get_run(run).ok_or_else(|| ParseError::UnknownRun {
            run: run.to_string(),
        })
    }

    /// Returns the run identifiers in sorted order.
    pub fn run_ids(&self) -> impl Iterator<Item = &str> {
        self.runs.keys().map(String::as_str)
    }

    /// Returns true if the model has no runs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Definition as serialized by the annotation parser, which may emit
/// declaration kinds the generator does not handle.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum WireDefinition {
    Struct(StructDefinition),
    Enum(EnumDefinition),
    #[serde(other)]
    Unsupported,
}

/// Deserializes runs, dropping unsupported declaration kinds.
fn deserialize_runs<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<TypeDefinition>>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = BTreeMap::<String, Vec<WireDefinition>>::deserialize(deserializer)?;
    Ok(wire
        .into_iter()
        .map(|(run, definitions)| {
            let definitions = definitions
                .into_iter()
                .filter_map(|d| match d {
                    WireDefinition::Struct(s) => Some(TypeDefinition::Struct(s)),
                    WireDefinition::Enum(e) => Some(TypeDefinition::Enum(e)),
                    WireDefinition::Unsupported => None,
                })
                .collect();
            (run, definitions)
        })
        .collect())
}
