//! Entity discovery and repository generation.

use std::path::PathBuf;

use eyre::{Context, Result};
use repogen_config::Config;
use repogen_core::TargetDirectory;
use repogen_ir::{ClassDescriptor, FieldDescriptor};
use serde::Serialize;

use crate::{Diagnostic, Substitutions, Template};

/// What to do when the repository file already exists.
///
/// The caller decides this before calling [`RepositoryGenerator::generate`],
/// typically by asking the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverwritePolicy {
    /// Leave the existing file alone.
    Skip,
    /// Replace it; the user has already agreed.
    Overwrite,
}

/// How a generation request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Created,
    Skipped,
    NotAnEntity,
    Overwritten,
}

impl Outcome {
    /// Whether a file was written.
    pub fn wrote_file(&self) -> bool {
        matches!(self, Outcome::Created | Outcome::Overwritten)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::Created => "created",
            Outcome::Skipped => "skipped",
            Outcome::NotAnEntity => "not an entity",
            Outcome::Overwritten => "overwritten",
        };
        f.write_str(s)
    }
}

/// One generation request: the classes of a source file plus the caller's
/// decision about existing files.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub candidates: &'a [ClassDescriptor],
    pub overwrite_policy: OverwritePolicy,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(candidates: &'a [ClassDescriptor], overwrite_policy: OverwritePolicy) -> Self {
        Self {
            candidates,
            overwrite_policy,
        }
    }
}

/// Everything needed to write a repository, computed without touching disk.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryPlan {
    /// Simple name of the entity class.
    pub entity: String,
    pub interface_name: String,
    /// `interface_name` plus the source extension.
    pub file_name: String,
    pub substitutions: Substitutions,
    /// Rendered file content.
    pub content: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of [`RepositoryGenerator::generate`].
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub outcome: Outcome,
    /// Set unless the outcome is [`Outcome::NotAnEntity`].
    pub interface_name: Option<String>,
    /// Set unless the outcome is [`Outcome::NotAnEntity`].
    pub substitutions: Option<Substitutions>,
    /// Path of the written file, for `Created` and `Overwritten`.
    pub path: Option<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationResult {
    fn not_an_entity() -> Self {
        Self {
            outcome: Outcome::NotAnEntity,
            interface_name: None,
            substitutions: None,
            path: None,
            diagnostics: Vec::new(),
        }
    }
}

/// Generates Spring Data repository interfaces for entity classes.
#[derive(Debug, Clone)]
pub struct RepositoryGenerator {
    entity_markers: Vec<String>,
    id_markers: Vec<String>,
    suffix: String,
    extension: String,
    default_primary_key_type: String,
    template: Template,
}

impl Default for RepositoryGenerator {
    fn default() -> Self {
        Self::new(&Config::default(), Template::builtin())
    }
}

impl RepositoryGenerator {
    pub fn new(config: &Config, template: Template) -> Self {
        Self {
            entity_markers: config.markers.entity.clone(),
            id_markers: config.markers.id.clone(),
            suffix: config.output.suffix.clone(),
            extension: config.output.extension.clone(),
            default_primary_key_type: config.output.default_primary_key_type.clone(),
            template,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// First candidate, in order, that carries an entity marker annotation.
    pub fn find_entity_class<'a>(
        &self,
        candidates: &'a [ClassDescriptor],
    ) -> Option<&'a ClassDescriptor> {
        candidates
            .iter()
            .find(|c| c.has_any_annotation(&self.entity_markers))
    }

    /// First field, in declaration order, that carries an id marker annotation.
    pub fn find_id_field<'a>(&self, entity: &'a ClassDescriptor) -> Option<&'a FieldDescriptor> {
        entity
            .fields
            .iter()
            .find(|f| f.has_any_annotation(&self.id_markers))
    }

    /// `Entity` and `PrimaryKeyType` for an entity and its id field.
    pub fn compute_substitutions(
        &self,
        entity: &ClassDescriptor,
        id_field: Option<&FieldDescriptor>,
    ) -> Substitutions {
        let primary_key_type = id_field
            .map(|f| f.type_canonical_name.as_str())
            .unwrap_or(self.default_primary_key_type.as_str());
        Substitutions::new(&entity.name, primary_key_type)
    }

    /// `CustomerRepository` for `Customer`.
    pub fn interface_name(&self, entity: &ClassDescriptor) -> String {
        format!("{}{}", entity.name, self.suffix)
    }

    /// `CustomerRepository.java` for `CustomerRepository`.
    pub fn file_name(&self, interface_name: &str) -> String {
        format!("{}.{}", interface_name, self.extension)
    }

    /// Work out what would be generated for these candidates.
    ///
    /// Returns `None` when no candidate is an entity.
    pub fn plan(&self, candidates: &[ClassDescriptor]) -> Option<RepositoryPlan> {
        let entity = self.find_entity_class(candidates)?;
        let id_field = self.find_id_field(entity);

        let mut diagnostics = Vec::new();
        match id_field {
            Some(field) => tracing::debug!(
                entity = %entity.name,
                field = %field.name,
                ty = %field.type_canonical_name,
                "found id field"
            ),
            None => {
                tracing::warn!(
                    entity = %entity.name,
                    default = %self.default_primary_key_type,
                    "entity has no id field, using default primary key type"
                );
                diagnostics.push(
                    Diagnostic::warning(
                        Diagnostic::NO_ID_FIELD,
                        format!(
                            "entity '{}' has no field annotated with @Id, using '{}' as the primary key type",
                            entity.name, self.default_primary_key_type
                        ),
                    )
                    .at(entity.qualified_name()),
                );
            }
        }

        let interface_name = self.interface_name(entity);
        let file_name = self.file_name(&interface_name);
        let substitutions = self.compute_substitutions(entity, id_field);

        let context = substitutions
            .clone()
            .with(Substitutions::NAME, &interface_name)
            .with(
                Substitutions::PACKAGE_NAME,
                entity.package.as_deref().unwrap_or_default(),
            );
        let content = self.template.render(&context);

        Some(RepositoryPlan {
            entity: entity.name.clone(),
            interface_name,
            file_name,
            substitutions,
            content,
            diagnostics,
        })
    }

    /// Generate the repository for a request into `dir`.
    ///
    /// The existence check and the delete/create that follows it run
    /// back-to-back; concurrent generation into the same directory is not
    /// supported. Errors from `dir` are returned as-is, with context.
    pub fn generate<D>(&self, request: &GenerationRequest<'_>, dir: &mut D) -> Result<GenerationResult>
    where
        D: TargetDirectory + ?Sized,
    {
        let Some(plan) = self.plan(request.candidates) else {
            tracing::debug!(
                candidates = request.candidates.len(),
                "no entity class among candidates"
            );
            return Ok(GenerationResult::not_an_entity());
        };

        let (outcome, path) = if !dir.contains(&plan.file_name) {
            let path = self.materialize(&plan, dir)?;
            (Outcome::Created, Some(path))
        } else {
            match request.overwrite_policy {
                OverwritePolicy::Skip => {
                    tracing::debug!(file = %plan.file_name, "file exists, skipping");
                    (Outcome::Skipped, None)
                }
                OverwritePolicy::Overwrite => {
                    dir.delete(&plan.file_name).wrap_err_with(|| {
                        format!("failed to replace existing '{}'", plan.file_name)
                    })?;
                    let path = self.materialize(&plan, dir)?;
                    (Outcome::Overwritten, Some(path))
                }
            }
        };

        tracing::debug!(interface = %plan.interface_name, %outcome, "generation finished");

        Ok(GenerationResult {
            outcome,
            interface_name: Some(plan.interface_name),
            substitutions: Some(plan.substitutions),
            path,
            diagnostics: plan.diagnostics,
        })
    }

    fn materialize<D>(&self, plan: &RepositoryPlan, dir: &mut D) -> Result<PathBuf>
    where
        D: TargetDirectory + ?Sized,
    {
        dir.materialize(&plan.file_name, &plan.content)
            .wrap_err_with(|| format!("failed to generate '{}'", plan.file_name))
    }
}
