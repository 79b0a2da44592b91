use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use boxoffice::cli::Cli;

/// Environment variable holding the log filter (e.g. `boxoffice=debug`).
const LOG_ENV: &str = "BOXOFFICE_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
