//! Generate operation - write a repository next to an entity source file.

use std::path::Path;

use eyre::{Context, Result};
use repogen_codegen::{GenerationRequest, OverwritePolicy, RepositoryGenerator};
use repogen_core::{FsDirectory, TargetDirectory};
use repogen_ir::SourceUnit;

use crate::reports::{GenerateReport, PreviewReport};

/// Execute the generate operation.
///
/// `decide` is asked for an overwrite policy only when the target file
/// already exists.
pub fn generate<F>(
    generator: &RepositoryGenerator,
    source: &Path,
    unit: &SourceUnit,
    decide: F,
) -> Result<GenerateReport>
where
    F: FnOnce(&Path) -> Result<OverwritePolicy>,
{
    let mut dir = FsDirectory::containing(source);
    let file_name = target_file_name(generator, unit);
    let target = file_name.as_deref().map(|name| dir.path_of(name));

    let policy = match (&file_name, &target) {
        (Some(name), Some(path)) if dir.contains(name) => decide(path.as_path())?,
        _ => OverwritePolicy::Skip,
    };

    let request = GenerationRequest::new(&unit.classes, policy);
    let result = generator
        .generate(&request, &mut dir)
        .wrap_err_with(|| format!("Failed to generate repository for '{}'", source.display()))?;

    Ok(GenerateReport {
        source: source.to_path_buf(),
        target,
        result,
    })
}

/// Render the repository without touching the directory.
pub fn preview(
    generator: &RepositoryGenerator,
    source: &Path,
    unit: &SourceUnit,
) -> Result<PreviewReport> {
    let dir = FsDirectory::containing(source);
    let plan = generator.plan(&unit.classes);
    let target = plan.as_ref().map(|p| dir.path_of(&p.file_name));
    let exists = plan.as_ref().is_some_and(|p| dir.contains(&p.file_name));

    Ok(PreviewReport {
        source: source.to_path_buf(),
        target,
        exists,
        plan,
    })
}

fn target_file_name(generator: &RepositoryGenerator, unit: &SourceUnit) -> Option<String> {
    let entity = generator.find_entity_class(&unit.classes)?;
    Some(generator.file_name(&generator.interface_name(entity)))
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, fs, path::PathBuf};

    use repogen_codegen::Outcome;
    use tempfile::TempDir;

    use super::*;

    const CUSTOMER: &str = r#"package com.acme.crm;

import javax.persistence.Entity;
import javax.persistence.Id;

@Entity
public class Customer {
    @Id
    private Long id;
    private String name;
}
"#;

    fn setup(source: &str) -> (TempDir, PathBuf, SourceUnit) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Customer.java");
        fs::write(&path, source).unwrap();
        let unit = repogen_java::inspect_file(&path).unwrap();
        (temp, path, unit)
    }

    #[test]
    fn test_generate_creates_without_asking() {
        let (temp, path, unit) = setup(CUSTOMER);
        let generator = RepositoryGenerator::default();

        let report = generate(&generator, &path, &unit, |_| {
            panic!("should not ask when the file is new")
        })
        .unwrap();

        assert_eq!(report.result.outcome, Outcome::Created);
        let written = fs::read_to_string(temp.path().join("CustomerRepository.java")).unwrap();
        assert!(written.starts_with("package com.acme.crm;"));
        assert!(written.contains("JpaRepository<Customer, Long>"));
    }

    #[test]
    fn test_generate_asks_once_when_file_exists() {
        let (temp, path, unit) = setup(CUSTOMER);
        let existing = temp.path().join("CustomerRepository.java");
        fs::write(&existing, "// hand written").unwrap();
        let asked = Cell::new(0);

        let report = generate(&RepositoryGenerator::default(), &path, &unit, |target| {
            asked.set(asked.get() + 1);
            assert_eq!(target, existing.as_path());
            Ok(OverwritePolicy::Skip)
        })
        .unwrap();

        assert_eq!(asked.get(), 1);
        assert_eq!(report.result.outcome, Outcome::Skipped);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "// hand written");
    }

    #[test]
    fn test_generate_overwrites_on_consent() {
        let (temp, path, unit) = setup(CUSTOMER);
        let existing = temp.path().join("CustomerRepository.java");
        fs::write(&existing, "// stale").unwrap();

        let report = generate(&RepositoryGenerator::default(), &path, &unit, |_| {
            Ok(OverwritePolicy::Overwrite)
        })
        .unwrap();

        assert_eq!(report.result.outcome, Outcome::Overwritten);
        assert!(fs::read_to_string(&existing).unwrap().contains("CustomerRepository"));
    }

    #[test]
    fn test_generate_not_an_entity_writes_nothing() {
        let (temp, path, unit) = setup("public class Product { private Long id; }");

        let report = generate(&RepositoryGenerator::default(), &path, &unit, |_| {
            panic!("should not ask for a non-entity")
        })
        .unwrap();

        assert!(!report.is_entity());
        assert!(report.target.is_none());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_preview_does_not_write() {
        let (temp, path, unit) = setup(CUSTOMER);

        let report = preview(&RepositoryGenerator::default(), &path, &unit).unwrap();

        let plan = report.plan.unwrap();
        assert_eq!(plan.file_name, "CustomerRepository.java");
        assert!(!report.exists);
        assert_eq!(report.target, Some(temp.path().join("CustomerRepository.java")));
        assert!(!temp.path().join("CustomerRepository.java").exists());
    }
}
