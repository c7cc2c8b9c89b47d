//! Spring Data repository generation.
//!
//! Given the classes found in a source file, [`RepositoryGenerator`] picks the
//! entity, works out its primary-key type, renders the repository template and
//! writes `<Entity>Repository.java` into a [`TargetDirectory`]. What to do about
//! an existing file is decided by the caller and passed in as an
//! [`OverwritePolicy`]; the generator never prompts.
//!
//! # Module Organization
//!
//! - [`generator`] - entity/id discovery and the generate operation
//! - [`substitutions`] - the placeholder map handed to templates
//! - [`template`] - `${Name}` / `#if` template rendering
//! - [`diagnostic`] - non-fatal findings reported alongside a result
//! - [`testing`] - a recording [`TargetDirectory`] fake (feature-gated)
//!
//! [`TargetDirectory`]: repogen_core::TargetDirectory

pub mod diagnostic;
pub mod generator;
pub mod substitutions;
pub mod template;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use diagnostic::{Diagnostic, Severity};
pub use generator::{
    GenerationRequest, GenerationResult, Outcome, OverwritePolicy, RepositoryGenerator,
    RepositoryPlan,
};
pub use substitutions::Substitutions;
pub use template::Template;
