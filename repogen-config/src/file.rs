use std::path::{Path, PathBuf};

use crate::{Config, DEFAULT_CONFIG_TOML, Error, Result, parse_config};

/// A repogen.toml location together with the config it yields.
///
/// The file is optional: when it does not exist the built-in defaults apply.
#[derive(Debug)]
pub struct RepogenToml {
    path: PathBuf,
    content: Option<String>,
    config: Config,
}

impl RepogenToml {
    /// Open and parse a repogen.toml file that must exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content: Some(content),
            config,
        })
    }

    /// Open a repogen.toml if present, otherwise fall back to defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                content: None,
                config: Config::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the config was read from disk.
    pub fn exists(&self) -> bool {
        self.content.is_some()
    }

    /// Raw content, or the default file content when nothing was read.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or(DEFAULT_CONFIG_TOML)
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Custom template path, resolved against the config file's directory.
    pub fn template_path(&self) -> Option<PathBuf> {
        let template = self.config.output.template.as_ref()?;
        if template.is_absolute() {
            return Some(template.clone());
        }
        let base = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        Some(base.join(template))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let toml = RepogenToml::open_or_default(temp.path().join("repogen.toml")).unwrap();

        assert!(!toml.exists());
        assert_eq!(toml.config(), &Config::default());
        assert_eq!(toml.content(), DEFAULT_CONFIG_TOML);
        assert!(toml.template_path().is_none());
    }

    #[test]
    fn test_open_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repogen.toml");
        fs::write(&path, "[output]\nsuffix = \"Dao\"\n").unwrap();

        let toml = RepogenToml::open_or_default(&path).unwrap();

        assert!(toml.exists());
        assert_eq!(toml.config().output.suffix, "Dao");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let err = RepogenToml::open(temp.path().join("repogen.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_template_path_is_relative_to_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repogen.toml");
        fs::write(&path, "[output]\ntemplate = \"templates/Repo.java\"\n").unwrap();

        let toml = RepogenToml::open(&path).unwrap();

        assert_eq!(
            toml.template_path(),
            Some(temp.path().join("templates/Repo.java"))
        );
    }

    #[test]
    fn test_template_path_bare_config_name() {
        let toml = RepogenToml {
            path: PathBuf::from("repogen.toml"),
            content: None,
            config: Config {
                output: crate::OutputConfig {
                    template: Some(PathBuf::from("Repo.java")),
                    ..Default::default()
                },
                ..Default::default()
            },
        };
        assert_eq!(toml.template_path(), Some(PathBuf::from("./Repo.java")));
    }
}
