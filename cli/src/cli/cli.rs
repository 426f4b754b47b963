// cli/src/cli/cli.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use registry::PatientRegistry;

use crate::cli::interactive::run_cli_interactive;

/// CLI entry point for the patient record system
#[derive(Parser, Debug)]
#[command(name = "medreg-cli")]
#[command(version = "0.1.0")]
#[command(about = "In-memory patient record system CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    command: Option<MedRegCommands>,
}

/// Subcommands for the medreg CLI
#[derive(Subcommand, Debug)]
enum MedRegCommands {
    /// Run the interactive menu (the default when no subcommand is given)
    Interactive,
}

pub fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    log::info!("starting medreg CLI");

    // All state is transient per process run; the registry lives and dies
    // with the interactive loop.
    let mut registry = PatientRegistry::new();

    match args.command {
        Some(MedRegCommands::Interactive) | None => run_cli_interactive(&mut registry),
    }
}
