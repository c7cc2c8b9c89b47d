use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops::{self, InitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the config file
    #[arg(short, long, default_value = "repogen.toml")]
    pub config: PathBuf,

    /// Also write the built-in template to templates/Repository.java
    #[arg(long)]
    pub with_template: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(InitOptions {
            config: &self.config,
            with_template: self.with_template,
        })?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
