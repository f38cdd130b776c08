//! Command-line front end for the `splicegen` binary.

use anyhow::Context;
use clap::Parser;
use splicegen_codegen::merge::DEFAULT_MARKER;
use splicegen_codegen::{EditReport, JavaEditor, MergeOptions};
use std::path::PathBuf;

/// Regenerate the generated section of a Java source file.
#[derive(Parser, Debug)]
#[command(
    name = "splicegen",
    version,
    about = "Generate Java data classes from native type definitions and splice them into a Java file"
)]
pub struct Args {
    /// JSON type model produced by the annotation parser.
    #[arg(short, long)]
    pub model: PathBuf,

    /// Generation run to emit.
    #[arg(short, long)]
    pub run: String,

    /// Folder containing the target Java file.
    #[arg(short, long)]
    pub folder: PathBuf,

    /// Target class name (file name without extension). Defaults to the run.
    #[arg(short, long)]
    pub class: Option<String>,

    /// Marker text separating hand-written and generated code.
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Print the merged file to stdout instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip model validation before generating.
    #[arg(long)]
    pub skip_validation: bool,
}

impl Args {
    /// Returns the target class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.class.as_deref().unwrap_or(&self.run)
    }
}

/// Result of a CLI invocation.
#[derive(Debug)]
pub enum Outcome {
    /// The target file was rewritten.
    Edited(EditReport),
    /// Merged content for a dry run.
    Preview(String),
}

/// Runs one generation pass as described by `args`.
///
/// # Errors
/// Returns an error if the model cannot be loaded or validated, or if
/// rendering or editing the target fails.
pub fn run(args: &Args) -> anyhow::Result<Outcome> {
    let model = splicegen_schema::parse_model_file(&args.model)
        .with_context(|| format!("failed to load model {}", args.model.display()))?;
    let definitions = model.run(&args.run)?;

    if args.skip_validation {
        tracing::warn!("Skipping validation of run {}", args.run);
    } else {
        splicegen_schema::validate_definitions(definitions)
            .with_context(|| format!("invalid definitions in run {}", args.run))?;
    }

    let editor = JavaEditor::new(MergeOptions::new().marker(&args.marker));
    if args.dry_run {
        let content = editor.preview(definitions, args.class_name(), &args.folder)?;
        return Ok(Outcome::Preview(content));
    }

    let report = editor.edit(definitions, args.class_name(), &args.folder)?;
    Ok(Outcome::Edited(report))
}
