// cli/src/cli/help_display.rs

// This module provides the help text for the interactive menu and fuzzy
// suggestions for unrecognized input.

use strsim::jaro_winkler;

const JARO_WINKLER_THRESHOLD: f64 = 0.75;
const MAX_SUGGESTIONS: usize = 3;

/// Menu command syntax and descriptions, one row per command.
const COMMANDS: &[(&str, &str)] = &[
    ("1 | add", "Add a new patient record (ID, name, age)"),
    ("2 | update", "Update a patient's medical history or current condition"),
    ("3 | remove", "Remove a patient from the consultation queue"),
    ("4 | schedule", "Schedule an appointment with a doctor"),
    ("5 | prescribe | issue", "Issue a prescription to a patient"),
    ("6 | summary | search", "Search for a patient and display a summary"),
    ("7 | exit | quit | q", "Exit the CLI"),
    ("help [command]", "Display this help message or help for a specific command"),
    ("clear | clean", "Clear the terminal screen"),
];

/// All named aliases the menu accepts, used for fuzzy suggestions.
const ALIASES: &[&str] = &[
    "add", "update", "remove", "schedule", "prescribe", "issue", "summary", "search", "exit",
    "quit", "help", "clear", "clean",
];

/// Prints help for the interactive menu, optionally filtered by a command
/// string.
pub fn print_interactive_help(filter: Option<&str>) {
    match filter {
        Some(command_filter) => print_filtered_help(command_filter),
        None => print_full_help(),
    }
}

fn print_full_help() {
    println!("\n--- Menu Commands ---");
    for (syntax, description) in COMMANDS {
        println!("  {syntax:<24} - {description}");
    }
    println!("---------------------");
}

fn print_filtered_help(command_filter: &str) {
    let filter_lower = command_filter.to_lowercase();
    let mut found_match = false;

    println!("\n--- Help for '{command_filter}' ---");
    for (syntax, description) in COMMANDS {
        if syntax.to_lowercase().contains(&filter_lower)
            || description.to_lowercase().contains(&filter_lower)
        {
            println!("  {syntax:<24} - {description}");
            found_match = true;
        }
    }

    if !found_match {
        let suggestions = suggest_command(command_filter);
        if suggestions.is_empty() {
            println!("No specific help found for '{command_filter}'. Displaying general help.");
            print_full_help();
        } else {
            println!("No exact help found for '{command_filter}'. Did you mean one of these?");
            for suggestion in suggestions {
                println!("  {suggestion}");
            }
        }
    }
    println!("------------------------------------");
}

/// Returns the closest named commands to the given input, best match first.
pub fn suggest_command(input: &str) -> Vec<String> {
    let Some(first_word) = input.split_whitespace().next() else {
        return Vec::new();
    };
    let lowered = first_word.to_lowercase();

    let mut scored: Vec<(&str, f64)> = ALIASES
        .iter()
        .map(|alias| (*alias, jaro_winkler(&lowered, alias)))
        .filter(|(_, similarity)| *similarity > JARO_WINKLER_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(alias, _)| alias.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::suggest_command;

    #[test]
    fn should_suggest_close_command_names() {
        let suggestions = suggest_command("sumary");
        assert!(suggestions.contains(&"summary".to_string()));
    }

    #[test]
    fn should_rank_exact_prefix_first() {
        let suggestions = suggest_command("schedul");
        assert_eq!(suggestions.first().map(String::as_str), Some("schedule"));
    }

    #[test]
    fn should_not_suggest_for_distant_input() {
        assert!(suggest_command("xyzzy").is_empty());
    }

    #[test]
    fn should_not_suggest_for_blank_input() {
        assert!(suggest_command("   ").is_empty());
    }
}
