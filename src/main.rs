//! ZMON CLI - command line client for the ZMON monitoring service.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zmon_cli::cli::output;
use zmon_cli::cli::{execute, Cli};
use zmon_cli::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ZMON_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("zmon=debug")
        } else {
            EnvFilter::new("zmon=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    let config_file = PathBuf::from(shellexpand::tilde(&cli.config_file).into_owned());

    if let Err(e) = execute(cli.command, &config_file) {
        let suggestion = match &e {
            Error::Config(_) => Some("run: zmon configure"),
            Error::Auth(_) => Some("check your token or password"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
