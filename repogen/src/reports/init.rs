//! Init command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from writing the default configuration.
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<PathBuf>,
    /// Files left alone because they already existed.
    pub skipped: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.written.is_empty() {
            out.section("Created");
            for path in &self.written {
                out.added_item(&path.display().to_string());
            }
        }
        for path in &self.skipped {
            out.warning(&format!("{} already exists, left unchanged", path.display()));
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
    }
}
