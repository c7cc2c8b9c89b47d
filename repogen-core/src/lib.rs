//! Core file primitives for the repogen repository generator.
//!
//! This crate owns everything that touches the filesystem: writing generated
//! files without leaving partial output behind, and the [`TargetDirectory`]
//! abstraction the generator materializes into.

mod directory;
mod file;

pub use directory::{FsDirectory, TargetDirectory};
pub use file::{File, Overwrite, WriteResult, write_file};
