//! End-to-end generation: Java source in, repository file on disk out.

use std::fs;

use repogen_codegen::{GenerationRequest, Outcome, OverwritePolicy, RepositoryGenerator};
use repogen_core::FsDirectory;
use tempfile::TempDir;

const ORDER: &str = r#"package com.acme.orders;

import java.util.UUID;
import javax.persistence.Entity;
import javax.persistence.Id;

@Entity
public class Order {
    @Id
    private UUID orderId;

    private String reference;
}
"#;

const PRODUCT: &str = r#"package com.acme.catalog;

public class Product {
    private Long id;
}
"#;

fn generate_from(
    temp: &TempDir,
    file: &str,
    source: &str,
    policy: OverwritePolicy,
) -> repogen_codegen::GenerationResult {
    let path = temp.path().join(file);
    fs::write(&path, source).unwrap();

    let unit = repogen_java::inspect_file(&path).unwrap();
    let mut dir = FsDirectory::containing(&path);
    RepositoryGenerator::default()
        .generate(&GenerationRequest::new(&unit.classes, policy), &mut dir)
        .unwrap()
}

#[test]
fn test_order_repository_is_written_next_to_entity() {
    let temp = TempDir::new().unwrap();
    let result = generate_from(&temp, "Order.java", ORDER, OverwritePolicy::Skip);

    assert_eq!(result.outcome, Outcome::Created);
    let subs = result.substitutions.unwrap();
    assert_eq!(subs.entity(), "Order");
    assert_eq!(subs.primary_key_type(), "java.util.UUID");

    let path = temp.path().join("OrderRepository.java");
    assert_eq!(result.path.as_deref(), Some(path.as_path()));
    insta::assert_snapshot!("order_repository", fs::read_to_string(&path).unwrap());
}

#[test]
fn test_on_demand_imported_key_type_is_canonical() {
    let temp = TempDir::new().unwrap();
    let source = ORDER.replace("import java.util.UUID;", "import java.util.*;");
    let result = generate_from(&temp, "Order.java", &source, OverwritePolicy::Skip);

    assert_eq!(result.substitutions.unwrap().primary_key_type(), "java.util.UUID");
    let written = fs::read_to_string(temp.path().join("OrderRepository.java")).unwrap();
    assert!(written.contains("JpaRepository<Order, java.util.UUID>"));
}

#[test]
fn test_product_without_entity_marker_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let result = generate_from(&temp, "Product.java", PRODUCT, OverwritePolicy::Overwrite);

    assert_eq!(result.outcome, Outcome::NotAnEntity);
    assert!(!temp.path().join("ProductRepository.java").exists());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn test_existing_repository_skip_and_overwrite() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("OrderRepository.java");
    fs::write(&existing, "// hand written\n").unwrap();

    let skipped = generate_from(&temp, "Order.java", ORDER, OverwritePolicy::Skip);
    assert_eq!(skipped.outcome, Outcome::Skipped);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "// hand written\n");

    let overwritten = generate_from(&temp, "Order.java", ORDER, OverwritePolicy::Overwrite);
    assert_eq!(overwritten.outcome, Outcome::Overwritten);
    assert!(
        fs::read_to_string(&existing)
            .unwrap()
            .contains("extends JpaRepository<Order, java.util.UUID>")
    );
}

#[test]
fn test_unwritable_directory_fails_without_partial_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Order.java");
    fs::write(&path, ORDER).unwrap();
    let unit = repogen_java::inspect_file(&path).unwrap();

    // A regular file where the target directory should be.
    let blocker = temp.path().join("out");
    fs::write(&blocker, "").unwrap();
    let mut dir = FsDirectory::new(&blocker);

    let result = RepositoryGenerator::default().generate(
        &GenerationRequest::new(&unit.classes, OverwritePolicy::Skip),
        &mut dir,
    );

    assert!(result.is_err());
    assert!(!temp.path().join("OrderRepository.java").exists());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "");
}
