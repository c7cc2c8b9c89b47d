//! Configuration types for repogen.toml.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Primary-key type used when the entity has no id field.
pub const DEFAULT_PRIMARY_KEY_TYPE: &str = "Long";

/// Appended to the entity name to form the interface name.
pub const DEFAULT_SUFFIX: &str = "Repository";

/// Extension of the generated source file, without the dot.
pub const DEFAULT_EXTENSION: &str = "java";

/// The file `repogen init` writes. Parses to [`Config::default`].
pub const DEFAULT_CONFIG_TOML: &str = r#"# repogen configuration

[markers]
# A class carrying any of these annotations is an entity.
entity = ["javax.persistence.Entity", "jakarta.persistence.Entity"]
# The first field carrying any of these annotations is the primary key.
id = ["javax.persistence.Id", "jakarta.persistence.Id"]

[output]
suffix = "Repository"
extension = "java"
default_primary_key_type = "Long"
# template = "templates/Repository.java"
"#;

/// Root of repogen.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Annotations that drive entity and id detection.
    #[serde(default)]
    pub markers: Markers,

    /// How the generated file is named and rendered.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Qualified annotation names that identify entities and primary keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Markers {
    #[serde(default = "default_entity_markers")]
    pub entity: Vec<String>,

    #[serde(default = "default_id_markers")]
    pub id: Vec<String>,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            entity: default_entity_markers(),
            id: default_id_markers(),
        }
    }
}

fn default_entity_markers() -> Vec<String> {
    vec![
        "javax.persistence.Entity".to_string(),
        "jakarta.persistence.Entity".to_string(),
    ]
}

fn default_id_markers() -> Vec<String> {
    vec![
        "javax.persistence.Id".to_string(),
        "jakarta.persistence.Id".to_string(),
    ]
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_suffix")]
    pub suffix: String,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_primary_key_type")]
    pub default_primary_key_type: String,

    /// Custom template, relative to the directory of repogen.toml.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            extension: default_extension(),
            default_primary_key_type: default_primary_key_type(),
            template: None,
        }
    }
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_primary_key_type() -> String {
    DEFAULT_PRIMARY_KEY_TYPE.to_string()
}
