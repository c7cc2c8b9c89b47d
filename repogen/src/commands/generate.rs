use std::{
    io::IsTerminal,
    path::{Path, PathBuf},
};

use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};
use repogen_codegen::OverwritePolicy;

use super::{UnwrapOrExit, load_generator};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Java source file containing the entity class
    pub file: PathBuf,

    /// Path to repogen.toml (defaults to ./repogen.toml)
    #[arg(short, long, default_value = "repogen.toml")]
    pub config: PathBuf,

    /// Replace an existing repository file without asking
    #[arg(long, conflicts_with = "skip_existing")]
    pub overwrite: bool,

    /// Leave an existing repository file untouched without asking
    #[arg(long)]
    pub skip_existing: bool,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let generator = load_generator(&self.config)?;
        let unit = repogen_java::inspect_file(&self.file).unwrap_or_exit();
        let mut out = TerminalOutput::new();

        if self.dry_run {
            let report = ops::preview(&generator, &self.file, &unit)?;
            report.render(&mut out);
            if report.plan.is_none() {
                std::process::exit(1);
            }
            return Ok(());
        }

        let report = ops::generate(&generator, &self.file, &unit, |path| self.decide(path))?;
        report.render(&mut out);
        if !report.is_entity() {
            std::process::exit(1);
        }
        Ok(())
    }

    /// Policy for an existing target: flags first, then ask on a terminal.
    fn decide(&self, path: &Path) -> Result<OverwritePolicy> {
        if self.overwrite {
            return Ok(OverwritePolicy::Overwrite);
        }
        if self.skip_existing {
            return Ok(OverwritePolicy::Skip);
        }
        if !std::io::stdin().is_terminal() {
            tracing::info!(path = %path.display(), "not a terminal, keeping existing file");
            return Ok(OverwritePolicy::Skip);
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "{} already exists. Do you want to override?",
                path.display()
            ))
            .default(false)
            .interact()
            .wrap_err("Failed to get overwrite confirmation")?;

        Ok(if confirmed {
            OverwritePolicy::Overwrite
        } else {
            OverwritePolicy::Skip
        })
    }
}
