mod completions;
mod generate;
mod init;
mod inspect;

use std::path::Path;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use inspect::InspectCommand;
use repogen_codegen::{RepositoryGenerator, Template};
use repogen_config::RepogenToml;

/// Extension trait for exiting on config/source errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load repogen.toml (or defaults) and build a generator from it.
pub(crate) fn load_generator(config: &Path) -> Result<RepositoryGenerator> {
    let repogen_toml = RepogenToml::open_or_default(config).unwrap_or_exit();
    let template = match repogen_toml.template_path() {
        Some(path) => Template::from_file(path)?,
        None => Template::builtin(),
    };
    tracing::debug!(
        config = %config.display(),
        found = repogen_toml.exists(),
        template = template.name(),
        "loaded configuration"
    );
    Ok(RepositoryGenerator::new(repogen_toml.config(), template))
}

#[derive(Parser)]
#[command(name = "repogen")]
#[command(version)]
#[command(about = "Generate Spring Data repository interfaces for JPA entities")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a repository interface next to an entity source file
    Generate(GenerateCommand),

    /// Show the classes, annotations and fields found in a source file
    Inspect(InspectCommand),

    /// Write a default repogen.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
