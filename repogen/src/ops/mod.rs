//! Core operations.
//!
//! This module contains the business logic for repogen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod init;
pub mod inspect;

pub use generate::{generate, preview};
pub use init::{InitOptions, init};
pub use inspect::inspect;
