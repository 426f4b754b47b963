// cli/src/cli/handlers.rs

// One handler per menu item. Each handler elicits raw text input and
// invokes exactly one registry operation; existence checks stay inside the
// registry, so the handlers only translate input and report outcomes.

use std::collections::HashMap;
use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Color},
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use rustyline::DefaultEditor;
use serde_json::Value;

use models::{DoctorId, PatientId};
use registry::PatientRegistry;

/// Reads one trimmed line of input under the given prompt.
fn prompt(rl: &mut DefaultEditor, message: &str) -> Result<String> {
    let line = rl.readline(message)?;
    Ok(line.trim().to_string())
}

fn prompt_patient_id(rl: &mut DefaultEditor, message: &str) -> Result<Option<PatientId>> {
    let text = prompt(rl, message)?;
    match text.parse::<PatientId>() {
        Ok(id) => Ok(Some(id)),
        Err(err) => {
            println!("Invalid patient ID: {err}.");
            Ok(None)
        }
    }
}

fn prompt_doctor_id(rl: &mut DefaultEditor, message: &str) -> Result<Option<DoctorId>> {
    let text = prompt(rl, message)?;
    match text.parse::<DoctorId>() {
        Ok(id) => Ok(Some(id)),
        Err(err) => {
            println!("Invalid doctor ID: {err}.");
            Ok(None)
        }
    }
}

/// Menu item 1: Add Patient Record. Medical history and condition are left
/// at their defaults; option 2 fills them in later.
pub fn handle_add_patient(registry: &mut PatientRegistry, rl: &mut DefaultEditor) -> Result<()> {
    let Some(id) = prompt_patient_id(rl, "Enter patient ID: ")? else {
        return Ok(());
    };
    let name = prompt(rl, "Enter patient name: ")?;
    let age_text = prompt(rl, "Enter patient age: ")?;
    let age: u32 = match age_text.parse() {
        Ok(age) => age,
        Err(_) => {
            println!("Invalid age: '{age_text}'.");
            return Ok(());
        }
    };

    registry.add_patient(id, name, age, Vec::new(), None);
    println!("Patient record added successfully.");
    Ok(())
}

/// Menu item 2: Update Patient Record. Only the non-blank fields are sent
/// to the registry.
pub fn handle_update_patient(registry: &mut PatientRegistry, rl: &mut DefaultEditor) -> Result<()> {
    let Some(id) = prompt_patient_id(rl, "Enter patient ID to update: ")? else {
        return Ok(());
    };
    let medical_history = prompt(rl, "Enter new medical history (leave blank to keep current): ")?;
    let current_condition = prompt(rl, "Enter new current condition (leave blank to keep current): ")?;

    let mut updates = HashMap::new();
    if !medical_history.is_empty() {
        updates.insert("medical_history".to_string(), Value::String(medical_history));
    }
    if !current_condition.is_empty() {
        updates.insert("current_condition".to_string(), Value::String(current_condition));
    }

    if updates.is_empty() {
        println!("No changes made.");
        return Ok(());
    }

    match registry.update_patient(&id, &updates) {
        Ok(()) => println!("Patient record updated successfully."),
        Err(err) => println!("Failed to update patient record: {err}."),
    }
    Ok(())
}

/// Menu item 3: Remove Patient from Queue.
pub fn handle_remove_from_queue(
    registry: &mut PatientRegistry,
    rl: &mut DefaultEditor,
) -> Result<()> {
    let Some(id) = prompt_patient_id(rl, "Enter patient ID to remove from queue: ")? else {
        return Ok(());
    };
    registry.remove_from_queue(&id);
    println!("Patient removed from queue successfully.");
    Ok(())
}

/// Menu item 4: Schedule Appointment. Neither identifier is checked for
/// existence; the registry takes both as opaque tokens.
pub fn handle_schedule_appointment(
    registry: &mut PatientRegistry,
    rl: &mut DefaultEditor,
) -> Result<()> {
    let Some(patient_id) = prompt_patient_id(rl, "Enter patient ID to schedule appointment: ")?
    else {
        return Ok(());
    };
    let Some(doctor_id) = prompt_doctor_id(rl, "Enter doctor ID: ")? else {
        return Ok(());
    };
    registry.schedule_appointment(patient_id, doctor_id);
    println!("Appointment scheduled successfully.");
    Ok(())
}

/// Menu item 5: Issue Prescription. The boolean result is the sole error
/// channel.
pub fn handle_issue_prescription(
    registry: &mut PatientRegistry,
    rl: &mut DefaultEditor,
) -> Result<()> {
    let Some(id) = prompt_patient_id(rl, "Enter patient ID to issue prescription: ")? else {
        return Ok(());
    };
    let medication = prompt(rl, "Enter medication: ")?;

    if registry.issue_prescription(&id, &medication) {
        println!("Prescription issued successfully.");
    } else {
        println!("Failed to issue prescription. Patient ID not found.");
    }
    Ok(())
}

/// Menu item 6: Search Patient Summary.
pub fn handle_search_summary(registry: &mut PatientRegistry, rl: &mut DefaultEditor) -> Result<()> {
    let Some(id) = prompt_patient_id(rl, "Enter patient ID to search summary: ")? else {
        return Ok(());
    };

    match registry.get_summary(&id) {
        Some(summary) => {
            println!("Patient Summary:");
            println!("  Name: {}", summary.name);
            println!("  Age: {}", summary.age);
            match &summary.doctor {
                Some(doctor) => println!("  Doctor: {doctor}"),
                None => println!("  Doctor: none"),
            }
            println!("  Appointment Details: {}", summary.appointment_details);
            println!("  Medications: {:?}", summary.medications);
        }
        None => println!("Patient not found."),
    }
    Ok(())
}

/// Prints the menu text shown before each prompt.
pub fn print_menu() {
    println!();
    println!("Patient Record System Menu:");
    println!("1. Add Patient Record");
    println!("2. Update Patient Record");
    println!("3. Remove Patient from Queue");
    println!("4. Schedule Appointment");
    println!("5. Issue Prescription");
    println!("6. Search Patient Summary");
    println!("7. Exit");
}

/// Prints the colored welcome banner shown on startup and after `clear`.
pub fn print_welcome_screen() {
    let mut stdout = io::stdout();
    let _ = stdout.execute(style::SetForegroundColor(Color::Cyan));
    let _ = writeln!(
        stdout,
        "\nWelcome to the Patient Record System.\nType a menu number or command name and press Enter. Type 'help' for details, 'exit', 'quit', or 'q' to quit."
    );
    let _ = stdout.execute(style::ResetColor);
    let _ = stdout.flush();
}

/// Clears the terminal and moves the cursor home.
pub fn clear_terminal_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    Ok(())
}
