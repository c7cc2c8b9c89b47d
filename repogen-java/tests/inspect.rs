//! Inspection tests over realistic entity sources.

use repogen_java::{Error, inspect_file, inspect_source};

const CUSTOMER: &str = r#"
package com.acme.shop;

import javax.persistence.Entity;
import javax.persistence.GeneratedValue;
import javax.persistence.Id;
import java.util.List;

@Entity
public class Customer {
    @Id
    @GeneratedValue
    private Long id;

    private String name;

    private List<String> tags;
}
"#;

#[test]
fn test_customer_entity() {
    let unit = inspect_source(CUSTOMER, "Customer.java").unwrap();

    assert_eq!(unit.package.as_deref(), Some("com.acme.shop"));
    assert_eq!(unit.classes.len(), 1);

    let customer = &unit.classes[0];
    assert_eq!(customer.name, "Customer");
    assert_eq!(customer.package.as_deref(), Some("com.acme.shop"));
    assert!(customer.annotations.contains("javax.persistence.Entity"));

    let names: Vec<_> = customer.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["id", "name", "tags"]);

    let id = &customer.fields[0];
    assert_eq!(id.type_canonical_name, "Long");
    assert!(id.annotations.contains("javax.persistence.Id"));
    assert!(id.annotations.contains("javax.persistence.GeneratedValue"));

    assert!(customer.fields[1].annotations.is_empty());
    assert_eq!(customer.fields[2].type_canonical_name, "java.util.List<String>");
}

#[test]
fn test_imported_id_type_is_qualified() {
    let unit = inspect_source(
        r#"
        package com.acme.orders;

        import jakarta.persistence.*;
        import java.util.UUID;

        @Entity
        @Table(name = "orders")
        public class Order {
            @Id
            private UUID orderId;
        }
        "#,
        "Order.java",
    )
    .unwrap();

    let order = &unit.classes[0];
    assert!(order.annotations.contains("jakarta.persistence.Entity"));
    assert!(order.annotations.contains("jakarta.persistence.Table"));

    let id = &order.fields[0];
    assert_eq!(id.name, "orderId");
    assert_eq!(id.type_canonical_name, "java.util.UUID");
    assert!(id.annotations.contains("jakarta.persistence.Id"));
}

#[test]
fn test_on_demand_import_qualifies_id_type() {
    let unit = inspect_source(
        r#"
        package com.acme.orders;

        import jakarta.persistence.*;
        import java.util.*;

        @Entity
        public class Order {
            @Id
            private UUID orderId;

            private List<OrderLine> lines;
        }
        "#,
        "Order.java",
    )
    .unwrap();

    let order = &unit.classes[0];
    assert_eq!(order.fields[0].type_canonical_name, "java.util.UUID");
    assert_eq!(order.fields[1].type_canonical_name, "java.util.List<OrderLine>");
}

#[test]
fn test_qualified_annotation_usage() {
    let unit = inspect_source(
        r#"
        @javax.persistence.Entity
        class Invoice {
            @javax.persistence.Id
            java.math.BigInteger number;
        }
        "#,
        "Invoice.java",
    )
    .unwrap();

    let invoice = &unit.classes[0];
    assert!(invoice.package.is_none());
    assert!(invoice.annotations.contains("javax.persistence.Entity"));
    assert_eq!(invoice.fields[0].type_canonical_name, "java.math.BigInteger");
    assert!(invoice.fields[0].annotations.contains("javax.persistence.Id"));
}

#[test]
fn test_unresolved_annotation_kept_as_written() {
    let unit = inspect_source("@Entity class Product { Long id; }", "Product.java").unwrap();

    let product = &unit.classes[0];
    assert!(product.annotations.contains("Entity"));
    assert!(!product.annotations.contains("javax.persistence.Entity"));
}

#[test]
fn test_multiple_declarators_and_primitives() {
    let unit = inspect_source(
        "class Point { int x, y; long ids[]; }",
        "Point.java",
    )
    .unwrap();

    let fields: Vec<_> = unit.classes[0]
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.type_canonical_name.as_str()))
        .collect();
    assert_eq!(fields, [("x", "int"), ("y", "int"), ("ids", "long[]")]);
}

#[test]
fn test_only_top_level_classes_in_order() {
    let unit = inspect_source(
        r#"
        interface Named {}
        enum Kind { A, B }
        class First { static class Nested {} }
        record Pair(int a, int b) {}
        class Second {}
        "#,
        "Mixed.java",
    )
    .unwrap();

    let names: Vec<_> = unit.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn test_static_import_is_ignored() {
    let unit = inspect_source(
        r#"
        import static org.example.Constants.Id;

        class Thing {
            @Id Long id;
        }
        "#,
        "Thing.java",
    )
    .unwrap();

    let id = &unit.classes[0].fields[0];
    assert!(id.annotations.contains("Id"));
    assert!(!id.annotations.contains("org.example.Constants.Id"));
}

#[test]
fn test_syntax_error_is_reported() {
    let err = inspect_source("@Entity class Broken { Long id }", "Broken.java").unwrap_err();
    assert!(matches!(*err, Error::Syntax { .. }));
}

#[test]
fn test_empty_source_has_no_classes() {
    let unit = inspect_source("", "Empty.java").unwrap();
    assert!(unit.package.is_none());
    assert!(unit.classes.is_empty());
}

#[test]
fn test_inspect_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("Customer.java");
    std::fs::write(&path, CUSTOMER).unwrap();

    let unit = inspect_file(&path).unwrap();
    assert_eq!(unit.classes[0].name, "Customer");
}

#[test]
fn test_inspect_missing_file() {
    let err = inspect_file("/definitely/not/here/Customer.java").unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}
