// cli/src/main.rs

// This is the main entry point for the medreg CLI binary. It initializes
// logging and dispatches to the CLI logic.

use anyhow::Result;
use medreg_cli::cli::cli::start_cli;

fn main() -> Result<()> {
    env_logger::init();

    start_cli()
}
