//! Class, field and source-unit descriptors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Qualified annotation names attached to a class or field.
pub type AnnotationSet = BTreeSet<String>;

/// A field declared on a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared.
    pub name: String,
    /// Canonical type name, used verbatim in generated code.
    pub type_canonical_name: String,
    /// Qualified names of the annotations on this field.
    #[serde(default)]
    pub annotations: AnnotationSet,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_canonical_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_canonical_name: type_canonical_name.into(),
            annotations: AnnotationSet::new(),
        }
    }

    /// Add an annotation to this field.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.insert(annotation.into());
        self
    }

    /// Check whether the field carries any of the given annotations.
    pub fn has_any_annotation<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|n| self.annotations.contains(n.as_ref()))
    }
}

/// A class that may be eligible for repository generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Simple class name.
    pub name: String,
    /// Package the class lives in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Qualified names of the annotations on this class.
    #[serde(default)]
    pub annotations: AnnotationSet,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            annotations: AnnotationSet::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.insert(annotation.into());
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Check whether the class carries any of the given annotations.
    pub fn has_any_annotation<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|n| self.annotations.contains(n.as_ref()))
    }

    /// Fully qualified class name (`com.acme.Customer`), or the simple name
    /// when the class is in the default package.
    pub fn qualified_name(&self) -> String {
        match self.package.as_deref() {
            Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, self.name),
            _ => self.name.clone(),
        }
    }
}

/// Everything the inspector found in one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Declared package, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Top-level classes in declaration order.
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
}
