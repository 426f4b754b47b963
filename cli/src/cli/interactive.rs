// cli/src/cli/interactive.rs

// This file handles the interactive menu mode, including choice parsing
// and the read-eval loop around the registry.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use registry::PatientRegistry;

use crate::cli::handlers;
use crate::cli::help_display::{print_interactive_help, suggest_command};

/// A parsed menu choice. The numbered options match the menu text; most
/// also have a named alias.
#[derive(Debug, PartialEq)]
pub enum MenuCommand {
    AddPatient,
    UpdatePatient,
    RemoveFromQueue,
    ScheduleAppointment,
    IssuePrescription,
    SearchSummary,
    Help(Option<String>),
    Clear,
    Exit,
    Unknown,
}

/// Parses one line of menu input. Accepts the numbered choices 1-7 as well
/// as named aliases.
pub fn parse_command(input: &str) -> MenuCommand {
    let parts: Vec<&str> = input.trim().split_whitespace().collect();
    if parts.is_empty() {
        return MenuCommand::Unknown;
    }

    let choice = parts[0].to_lowercase();
    match choice.as_str() {
        "1" | "add" => MenuCommand::AddPatient,
        "2" | "update" => MenuCommand::UpdatePatient,
        "3" | "remove" => MenuCommand::RemoveFromQueue,
        "4" | "schedule" => MenuCommand::ScheduleAppointment,
        "5" | "prescribe" | "issue" => MenuCommand::IssuePrescription,
        "6" | "summary" | "search" => MenuCommand::SearchSummary,
        "7" | "exit" | "quit" | "q" => MenuCommand::Exit,
        "help" => {
            let filter = if parts.len() > 1 {
                Some(parts[1..].join(" "))
            } else {
                None
            };
            MenuCommand::Help(filter)
        }
        "clear" | "clean" => MenuCommand::Clear,
        _ => MenuCommand::Unknown,
    }
}

/// Main loop for the interactive menu mode.
pub fn run_cli_interactive(registry: &mut PatientRegistry) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let history_path = "medreg_cli_history.txt";
    let _ = rl.load_history(history_path);

    handlers::print_welcome_screen();

    loop {
        handlers::print_menu();

        let input = match rl.readline("Enter your choice (1-7): ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Failed to read line: {err}");
                break;
            }
        };
        if !input.trim().is_empty() {
            let _ = rl.add_history_entry(input.as_str());
        }

        let command = parse_command(&input);
        if command == MenuCommand::Exit {
            println!("Exiting...");
            break;
        }

        handle_menu_command(command, &input, registry, &mut rl)?;
    }

    let _ = rl.save_history(history_path);
    println!("Goodbye!");
    Ok(())
}

/// Dispatches one parsed menu choice to the matching handler.
pub fn handle_menu_command(
    command: MenuCommand,
    raw_input: &str,
    registry: &mut PatientRegistry,
    rl: &mut DefaultEditor,
) -> Result<()> {
    match command {
        MenuCommand::AddPatient => handlers::handle_add_patient(registry, rl)?,
        MenuCommand::UpdatePatient => handlers::handle_update_patient(registry, rl)?,
        MenuCommand::RemoveFromQueue => handlers::handle_remove_from_queue(registry, rl)?,
        MenuCommand::ScheduleAppointment => handlers::handle_schedule_appointment(registry, rl)?,
        MenuCommand::IssuePrescription => handlers::handle_issue_prescription(registry, rl)?,
        MenuCommand::SearchSummary => handlers::handle_search_summary(registry, rl)?,
        MenuCommand::Help(filter) => print_interactive_help(filter.as_deref()),
        MenuCommand::Clear => {
            handlers::clear_terminal_screen()?;
            handlers::print_welcome_screen();
        }
        MenuCommand::Exit => {}
        MenuCommand::Unknown => {
            println!("Invalid choice. Please enter a number between 1 and 7.");
            let suggestions = suggest_command(raw_input);
            if !suggestions.is_empty() {
                println!("Did you mean one of these?");
                for suggestion in suggestions {
                    println!("  {suggestion}");
                }
            }
        }
    }
    Ok(())
}
