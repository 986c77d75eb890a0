//! Contact Normalizer - Main entry point
//!
//! Reads email lists, phone lists or contact CSV files and prints a report
//! of what is valid, what is not, and the canonical form of each value.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{exit_status, files_or, Cli, Commands};
use contact_normalizer::{commands, Config};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout carries the reports)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let policy = cli.resolve_policy(&config);
    let format = cli.output_format();
    debug!(%policy, ?format, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let failed = match cli.command {
        Commands::Emails { files } => {
            let files = files_or(files, &config.email_file);
            commands::lint_emails(&files, policy, format, &mut out)
        }
        Commands::Phones { files } => {
            let files = files_or(files, &config.phone_file);
            commands::lint_phones(&files, format, &mut out)
        }
        Commands::Contacts { files } => {
            let files = files_or(files, &config.contacts_file);
            commands::process_contacts(&files, policy, format, &mut out)
        }
    };
    out.flush()?;

    let failed = failed?;
    if failed > 0 {
        debug!(failed, "Some input files could not be read");
    }
    Ok(ExitCode::from(exit_status(failed)))
}
