//! logctl - manage repositories on a log platform

mod cli;
mod commands;
mod config;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use logctl_admin::AdminClient;
use tracing::debug;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&cli.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    exit_code(run(cli).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load(&cli)?;
    let client = AdminClient::new(config)?;
    commands::run(&client, cli.command).await
}

/// Reports a failure once on stderr; the error chain is only logged at debug
fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
