//! Placeholder values for the repository template.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered placeholder map.
///
/// Only constructible with both an entity name and a primary-key type, so
/// `Entity` and `PrimaryKeyType` are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Substitutions {
    values: IndexMap<String, String>,
}

impl Substitutions {
    /// Simple name of the entity class.
    pub const ENTITY: &'static str = "Entity";
    /// Canonical name of the primary-key type.
    pub const PRIMARY_KEY_TYPE: &'static str = "PrimaryKeyType";
    /// Name of the generated interface.
    pub const NAME: &'static str = "NAME";
    /// Package of the generated interface, empty for the default package.
    pub const PACKAGE_NAME: &'static str = "PACKAGE_NAME";

    pub fn new(entity: impl Into<String>, primary_key_type: impl Into<String>) -> Self {
        let mut values = IndexMap::new();
        values.insert(Self::ENTITY.to_string(), entity.into());
        values.insert(Self::PRIMARY_KEY_TYPE.to_string(), primary_key_type.into());
        Self { values }
    }

    /// Add or replace a placeholder.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn entity(&self) -> &str {
        &self.values[Self::ENTITY]
    }

    pub fn primary_key_type(&self) -> &str {
        &self.values[Self::PRIMARY_KEY_TYPE]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
