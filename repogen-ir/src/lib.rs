//! Descriptor types for the repogen repository generator.
//!
//! These types are the boundary between the source inspector and the
//! generator. They are plain read-only data: the inspector builds them from a
//! source file, the generator only reads them.
//!
//! # Architecture
//!
//! ```text
//! Foo.java → repogen-java (inspection) → repogen-ir (descriptors) → repogen-codegen
//! ```

mod descriptor;

pub use descriptor::{AnnotationSet, ClassDescriptor, FieldDescriptor, SourceUnit};
