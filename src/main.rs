//! Item Form CLI

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use item_form::observability::init_logging;

use crate::cli::Cli;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(source) = init_logging(cli.logging()) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{source}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run().await {
        Ok(code) => code,
        Err(message) => {
            error!("{message}");

            ExitCode::FAILURE
        }
    }
}
