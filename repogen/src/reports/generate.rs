//! Generate command report data structures.

use std::path::PathBuf;

use repogen_codegen::{Diagnostic, GenerationResult, Outcome, RepositoryPlan, Substitutions};

use super::output::{Output, Report};

/// Shown when the inspected file has no entity class.
pub const NOT_AN_ENTITY: &str = "The current class is not a JPA entity";

/// Report data from generating a repository.
#[derive(Debug)]
pub struct GenerateReport {
    /// The inspected source file.
    pub source: PathBuf,
    /// Where the repository file goes, when there is an entity.
    pub target: Option<PathBuf>,
    pub result: GenerationResult,
}

impl GenerateReport {
    pub fn is_entity(&self) -> bool {
        self.result.outcome != Outcome::NotAnEntity
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.result.diagnostics, out);

        let target = self
            .target
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        match self.result.outcome {
            Outcome::NotAnEntity => {
                out.error(&format!("{} ({})", NOT_AN_ENTITY, self.source.display()));
                return;
            }
            Outcome::Created => {
                out.section("Created");
                out.added_item(&target);
            }
            Outcome::Overwritten => {
                out.section("Overwritten");
                out.added_item(&target);
            }
            Outcome::Skipped => {
                out.preformatted(&format!("Skipped: {} already exists", target));
            }
        }

        if let Some(subs) = &self.result.substitutions {
            render_substitutions(subs, out);
        }
    }
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    pub source: PathBuf,
    pub target: Option<PathBuf>,
    /// Whether the target file already exists.
    pub exists: bool,
    pub plan: Option<RepositoryPlan>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        let (Some(plan), Some(target)) = (&self.plan, &self.target) else {
            out.error(&format!("{} ({})", NOT_AN_ENTITY, self.source.display()));
            return;
        };

        render_diagnostics(&plan.diagnostics, out);

        out.divider(&target.display().to_string());
        out.preformatted(plan.content.trim_end());
        out.divider("Summary");
        if self.exists {
            out.preformatted(&format!(
                "{} already exists and would need confirmation to overwrite",
                plan.file_name
            ));
        } else {
            out.preformatted(&format!("{} would be created", plan.file_name));
        }
        render_substitutions(&plan.substitutions, out);
    }
}

fn render_diagnostics(diagnostics: &[Diagnostic], out: &mut dyn Output) {
    for diag in diagnostics {
        out.warning(&diag.message);
    }
}

fn render_substitutions(subs: &Substitutions, out: &mut dyn Output) {
    out.newline();
    out.section("Substitutions");
    for (key, value) in subs.iter() {
        out.key_value_indented(key, value);
    }
}
