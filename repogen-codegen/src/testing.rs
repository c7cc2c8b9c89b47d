//! Test utilities for the generator.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{cell::RefCell, collections::BTreeMap, path::PathBuf};

use eyre::{Result, eyre};
use repogen_core::TargetDirectory;

/// A call made against a [`RecordingDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Contains(String),
    Delete(String),
    Materialize(String),
}

/// In-memory [`TargetDirectory`] that records every call made against it.
#[derive(Debug, Default)]
pub struct RecordingDirectory {
    files: BTreeMap<String, String>,
    calls: RefCell<Vec<Call>>,
    fail_materialize: bool,
}

impl RecordingDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the directory with an existing file.
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }

    /// Make every `materialize` call fail, as an unwritable directory would.
    pub fn failing(mut self) -> Self {
        self.fail_materialize = true;
        self
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn delete_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Delete(_)))
    }

    pub fn materialize_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Materialize(_)))
    }

    fn count(&self, f: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| f(c)).count()
    }
}

impl TargetDirectory for RecordingDirectory {
    fn contains(&self, file_name: &str) -> bool {
        self.calls
            .borrow_mut()
            .push(Call::Contains(file_name.to_string()));
        self.files.contains_key(file_name)
    }

    fn delete(&mut self, file_name: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::Delete(file_name.to_string()));
        self.files
            .remove(file_name)
            .map(|_| ())
            .ok_or_else(|| eyre!("no such file '{}'", file_name))
    }

    fn materialize(&mut self, file_name: &str, content: &str) -> Result<PathBuf> {
        self.calls
            .borrow_mut()
            .push(Call::Materialize(file_name.to_string()));
        if self.fail_materialize {
            return Err(eyre!("directory is not writable"));
        }
        self.files
            .insert(file_name.to_string(), content.to_string());
        Ok(PathBuf::from(file_name))
    }
}
