use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::{UnwrapOrExit, load_generator};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Java source file to inspect
    pub file: PathBuf,

    /// Path to repogen.toml (defaults to ./repogen.toml)
    #[arg(short, long, default_value = "repogen.toml")]
    pub config: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let generator = load_generator(&self.config)?;
        let unit = repogen_java::inspect_file(&self.file).unwrap_or_exit();
        let report = ops::inspect(&generator, &self.file, unit);

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
