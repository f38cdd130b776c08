//! Marker-based merging of generated code into hand-written Java files.
//!
//! Everything above the marker line belongs to the developer and is copied
//! verbatim. Everything from the marker line down belongs to the generator
//! and is rebuilt on every run, which makes re-running idempotent.

use crate::error::CodegenError;
use crate::generator::Generator;
use crate::java::INDENT;
use splicegen_schema::TypeDefinition;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Default marker text separating hand-written and generated code.
pub const DEFAULT_MARKER: &str = "The remainder of this file is generated by splicegen; do not edit.";

/// Default line closing the enclosing class after the generated code.
pub const DEFAULT_TERMINATOR: &str = "}";

/// Extension of the files being edited.
pub const JAVA_EXTENSION: &str = "java";

/// Options controlling how generated code is merged into a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    marker: String,
    terminator: String,
}

impl MergeOptions {
    /// Creates merge options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
        }
    }

    /// Sets the marker text.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Sets the closing terminator line.
    #[must_use]
    pub fn terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Returns the marker text.
    #[must_use]
    pub fn marker_text(&self) -> &str {
        &self.marker
    }

    /// Returns the full marker comment line, without line break.
    #[must_use]
    pub fn marker_line(&self) -> String {
        format!("{INDENT}// {}", self.marker)
    }

    /// Checks that the marker can only match a dedicated marker line.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidMarker` if the marker is blank.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.marker.trim().is_empty() {
            return Err(CodegenError::InvalidMarker {
                marker: self.marker.clone(),
            });
        }
        Ok(())
    }
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a successful edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
    /// Path of the edited file.
    pub path: PathBuf,
    /// Number of hand-written lines retained above the marker.
    pub retained_lines: usize,
    /// Number of declarations emitted below the marker.
    pub declarations: usize,
}

/// Rewrites Java files by splicing generated declarations below a marker.
#[derive(Debug, Clone, Default)]
pub struct JavaEditor {
    options: MergeOptions,
}

impl JavaEditor {
    /// Creates an editor with the given options.
    #[must_use]
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Returns the merge options.
    #[must_use]
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Returns the path of the Java file for a class.
    #[must_use]
    pub fn target_path(folder: &Path, class_name: &str) -> PathBuf {
        folder.join(format!("{class_name}.{JAVA_EXTENSION}"))
    }

    /// Reads raw lines up to, but not including, the first marker line.
    ///
    /// Lines are split on `\n` only and kept byte for byte, so carriage
    /// returns and non-UTF-8 content survive. A blank marker never matches.
    /// Returns `None` if the input ends before a marker line is seen.
    ///
    /// # Errors
    /// Returns any IO error raised while reading.
    pub fn scan_prefix<R: BufRead>(&self, reader: R) -> std::io::Result<Option<Vec<Vec<u8>>>> {
        let marker = self.options.marker.as_bytes();
        let mut prefix = Vec::new();
        for line in reader.split(b'\n') {
            let line = line?;
            if contains_marker(&line, marker) {
                return Ok(Some(prefix));
            }
            prefix.push(line);
        }
        Ok(None)
    }

    /// Assembles the full file content from a retained prefix and the
    /// rendered declarations.
    #[must_use]
    pub fn assemble<S: AsRef<[u8]>>(&self, prefix: &[S], rendered: &str) -> Vec<u8> {
        let mut output = Vec::new();
        for line in prefix {
            output.extend_from_slice(line.as_ref());
            output.push(b'\n');
        }
        output.extend_from_slice(self.options.marker_line().as_bytes());
        output.push(b'\n');
        output.extend_from_slice(rendered.as_bytes());
        output.extend_from_slice(self.options.terminator.as_bytes());
        output.push(b'\n');
        output
    }

    /// Merges rendered declarations into existing file content.
    ///
    /// Returns `None` if the existing content has no marker line or the
    /// marker is blank.
    #[must_use]
    pub fn merge_content(&self, existing: &str, rendered: &str) -> Option<String> {
        self.options.validate().ok()?;
        // Reading from a byte slice cannot fail.
        let prefix = self.scan_prefix(existing.as_bytes()).ok().flatten()?;
        String::from_utf8(self.assemble(&prefix, rendered)).ok()
    }

    /// Renders the definitions and returns the merged content of the target
    /// file without writing it.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be read, lacks the marker,
    /// or a declaration fails to render.
    pub fn preview(
        &self,
        definitions: &[TypeDefinition],
        class_name: &str,
        folder: &Path,
    ) -> Result<String, CodegenError> {
        let path = Self::target_path(folder, class_name);
        let prefix = self.read_prefix(&path)?;
        let rendered = Generator::new(definitions).generate()?;
        let content = self.assemble(&prefix, &rendered);
        Ok(String::from_utf8_lossy(&content).into_owned())
    }

    /// Regenerates the generated section of `{folder}/{class_name}.java`.
    ///
    /// The target is left untouched unless both scanning and rendering
    /// succeed. The new content is written to a temporary file next to the
    /// target and renamed over it. A symlinked target is resolved first, so
    /// the link itself is kept and its destination is rewritten.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be read or written, lacks
    /// the marker, or a declaration fails to render.
    pub fn edit(
        &self,
        definitions: &[TypeDefinition],
        class_name: &str,
        folder: &Path,
    ) -> Result<EditReport, CodegenError> {
        let path = Self::target_path(folder, class_name);
        let prefix = self.read_prefix(&path)?;

        let generator = Generator::new(definitions);
        let rendered = generator.generate()?;
        let content = self.assemble(&prefix, &rendered);

        let resolved = fs::canonicalize(&path).map_err(|e| CodegenError::target(&path, e))?;
        write_atomically(&resolved, &content)?;

        let report = EditReport {
            path,
            retained_lines: prefix.len(),
            declarations: generator.top_level().count(),
        };
        tracing::info!(
            "Edited {} ({} retained lines, {} declarations)",
            report.path.display(),
            report.retained_lines,
            report.declarations
        );
        Ok(report)
    }

    /// Opens the target file and reads its hand-written prefix.
    fn read_prefix(&self, path: &Path) -> Result<Vec<Vec<u8>>, CodegenError> {
        self.options.validate()?;
        let file = fs::File::open(path).map_err(|e| CodegenError::target(path, e))?;
        self.scan_prefix(BufReader::new(file))
            .map_err(|e| CodegenError::target(path, e))?
            .ok_or_else(|| CodegenError::MarkerNotFound {
                path: path.to_path_buf(),
            })
    }
}

fn contains_marker(line: &[u8], marker: &[u8]) -> bool {
    !marker.is_empty() && line.windows(marker.len()).any(|w| w == marker)
}

/// Writes `content` to a temporary sibling of `path`, then renames it over
/// `path`, keeping the original permissions.
fn write_atomically(path: &Path, content: &[u8]) -> Result<(), CodegenError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| CodegenError::target(path, e))?;
    temp.write_all(content)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| CodegenError::target(path, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| CodegenError::target(path, e))?;
    }

    temp.persist(path)
        .map_err(|e| CodegenError::target(path, e.error))?;
    Ok(())
}
