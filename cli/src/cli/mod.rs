// cli/src/cli/mod.rs

// This file declares the modules within the 'cli' directory and re-exports
// common types and functions for easier access from other parts of the crate.

pub mod cli; // Declare cli.rs as a submodule
pub mod handlers;
pub mod help_display;
pub mod interactive;

pub use cli::start_cli;
pub use handlers::{print_menu, print_welcome_screen};
pub use help_display::{print_interactive_help, suggest_command};
pub use interactive::{parse_command, run_cli_interactive, MenuCommand};
