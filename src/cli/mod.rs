use std::process::ExitCode;

use clap::{Parser, Subcommand};

use item_form::config::LoggingConfig;

mod check;
mod template;

#[derive(Debug, Parser)]
#[command(name = "item-form", about = "Item draft tools", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a draft file against a set of taken codes
    Check(check::CheckArgs),

    /// Print the blank draft as YAML
    Template,
}

impl Cli {
    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub(crate) async fn run(self) -> Result<ExitCode, String> {
        match self.command {
            Commands::Check(args) => check::run(args).await,
            Commands::Template => template::run(),
        }
    }
}
