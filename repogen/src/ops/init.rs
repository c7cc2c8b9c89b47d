//! Init operation - write a default repogen.toml.

use std::path::{Path, PathBuf};

use eyre::Result;
use repogen_codegen::template::BUILTIN_SOURCE;
use repogen_config::{DEFAULT_CONFIG_TOML, RepogenToml};
use repogen_core::{File, WriteResult};

use crate::reports::InitReport;

/// Template path written by `--with-template`, relative to the config file.
pub const TEMPLATE_PATH: &str = "templates/Repository.java";

/// Options for the init operation.
pub struct InitOptions<'a> {
    /// Where to write repogen.toml.
    pub config: &'a Path,
    /// Also write the built-in template so it can be customised.
    pub with_template: bool,
}

/// Execute the init operation. Existing files are never overwritten.
pub fn init(opts: InitOptions) -> Result<InitReport> {
    let mut files = Vec::new();
    if opts.with_template {
        let config = DEFAULT_CONFIG_TOML.replace(
            &format!("# template = \"{}\"", TEMPLATE_PATH),
            &format!("template = \"{}\"", TEMPLATE_PATH),
        );
        files.push(File::new(opts.config, config).if_missing());
        files.push(File::new(template_path(opts.config), BUILTIN_SOURCE).if_missing());
    } else {
        files.push(File::new(opts.config, DEFAULT_CONFIG_TOML).if_missing());
    }

    let mut report = InitReport::default();
    for file in &files {
        match file.write()? {
            WriteResult::Written => report.written.push(file.path().to_path_buf()),
            WriteResult::Skipped => report.skipped.push(file.path().to_path_buf()),
        }
    }

    let template = template_path(opts.config);
    if opts.with_template && report.skipped.iter().any(|p| p == opts.config) {
        let uses_template = RepogenToml::open(opts.config)
            .ok()
            .and_then(|toml| toml.template_path())
            .is_some_and(|configured| configured == template);
        if !uses_template {
            report.warnings.push(format!(
                "{} does not set `template = \"{}\"`, so {} is not used",
                opts.config.display(),
                TEMPLATE_PATH,
                template.display()
            ));
        }
    }
    Ok(report)
}

fn template_path(config: &Path) -> PathBuf {
    match config.parent() {
        Some(dir) => dir.join(TEMPLATE_PATH),
        None => PathBuf::from(TEMPLATE_PATH),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use repogen_config::Config;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_writes_default_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("repogen.toml");

        let report = init(InitOptions {
            config: &config,
            with_template: false,
        })
        .unwrap();

        assert_eq!(report.written, vec![config.clone()]);
        let toml = RepogenToml::open(&config).unwrap();
        assert_eq!(toml.config(), &Config::default());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("repogen.toml");
        fs::write(&config, "[output]\nsuffix = \"Dao\"\n").unwrap();

        let report = init(InitOptions {
            config: &config,
            with_template: false,
        })
        .unwrap();

        assert!(report.written.is_empty());
        assert_eq!(report.skipped, vec![config.clone()]);
        assert_eq!(
            fs::read_to_string(&config).unwrap(),
            "[output]\nsuffix = \"Dao\"\n"
        );
    }

    #[test]
    fn test_init_with_template_warns_when_config_ignores_it() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("repogen.toml");
        fs::write(&config, "[output]\nsuffix = \"Dao\"\n").unwrap();

        let report = init(InitOptions {
            config: &config,
            with_template: true,
        })
        .unwrap();

        assert_eq!(report.written, vec![temp.path().join(TEMPLATE_PATH)]);
        assert_eq!(report.skipped, vec![config.clone()]);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("does not set `template = \"templates/Repository.java\"`"));
    }

    #[test]
    fn test_init_with_template_quiet_when_config_uses_it() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("repogen.toml");
        fs::write(&config, "[output]\ntemplate = \"templates/Repository.java\"\n").unwrap();

        let report = init(InitOptions {
            config: &config,
            with_template: true,
        })
        .unwrap();

        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_init_with_template() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("repogen.toml");

        let report = init(InitOptions {
            config: &config,
            with_template: true,
        })
        .unwrap();

        assert_eq!(report.written.len(), 2);
        let toml = RepogenToml::open(&config).unwrap();
        assert_eq!(
            toml.template_path(),
            Some(temp.path().join("templates/Repository.java"))
        );
        assert_eq!(
            fs::read_to_string(temp.path().join(TEMPLATE_PATH)).unwrap(),
            BUILTIN_SOURCE
        );
    }
}
