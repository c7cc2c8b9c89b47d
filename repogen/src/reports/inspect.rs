//! Inspect command report data structures.

use std::path::PathBuf;

use repogen_ir::SourceUnit;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from inspecting a source file.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub source: PathBuf,
    pub unit: SourceUnit,
    /// Class a repository would be generated for.
    pub entity: Option<String>,
    /// Field used as the primary key.
    pub id_field: Option<String>,
    pub primary_key_type: Option<String>,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.source.display().to_string());
        out.key_value(
            "Package",
            self.unit.package.as_deref().unwrap_or("(default)"),
        );

        if self.unit.classes.is_empty() {
            out.newline();
            out.preformatted("No classes found.");
        }

        for class in &self.unit.classes {
            out.newline();
            out.section(&format!("class {}", class.name));
            if !class.annotations.is_empty() {
                let annotations: Vec<_> = class.annotations.iter().map(|a| format!("@{}", a)).collect();
                out.key_value_indented("annotations", &annotations.join(" "));
            }
            for field in &class.fields {
                let mut line = format!("{}: {}", field.name, field.type_canonical_name);
                for annotation in &field.annotations {
                    line.push_str(&format!(" @{}", annotation));
                }
                out.list_item(&line);
            }
        }

        out.newline();
        match &self.entity {
            Some(entity) => {
                out.key_value("Entity", entity);
                let id = self.id_field.as_deref().unwrap_or("(none)");
                out.key_value("Id field", id);
                if let Some(ty) = &self.primary_key_type {
                    out.key_value("Primary key type", ty);
                }
            }
            None => out.key_value("Entity", "(none)"),
        }
    }
}
