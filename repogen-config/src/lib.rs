//! Configuration for the repogen repository generator.
//!
//! Reads and validates `repogen.toml`: which annotations mark an entity and its
//! primary key, how the generated interface is named, and which template it
//! is rendered from. Every setting has a default, so the file is optional.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod parse;
mod validate;

pub use config::{
    Config, DEFAULT_CONFIG_TOML, DEFAULT_EXTENSION, DEFAULT_PRIMARY_KEY_TYPE, DEFAULT_SUFFIX,
    Markers, OutputConfig,
};
pub use error::{Error, Result, SourceContext};
pub use file::RepogenToml;
pub use parse::parse_config;
