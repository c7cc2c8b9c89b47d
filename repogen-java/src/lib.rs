//! Java source inspection for the repogen repository generator.
//!
//! Parses a Java compilation unit with tree-sitter and describes its top-level
//! classes as [`ClassDescriptor`]s: annotations and field types are resolved
//! to qualified names through the file's imports where possible.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod imports;
mod inspect;

use std::path::Path;

pub use error::{Error, Result};
pub use imports::ImportTable;
pub use inspect::Inspector;
pub use repogen_ir::{ClassDescriptor, FieldDescriptor, SourceUnit};

/// Inspect Java source text. `filename` is only used for error reporting.
pub fn inspect_source(source: &str, filename: &str) -> Result<SourceUnit> {
    Inspector::new()?.inspect(source, filename)
}

/// Read and inspect a Java source file.
pub fn inspect_file(path: impl AsRef<Path>) -> Result<SourceUnit> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    inspect_source(&source, &path.display().to_string())
}
