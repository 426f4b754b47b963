// models/src/patient.rs

use serde::{Deserialize, Serialize};

use crate::identifiers::PatientId;

/// A patient record: personal details, medical history, and the current
/// condition. The identifier is immutable after creation; history entries
/// keep insertion order and duplicates are allowed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub medical_history: Vec<String>,
    pub current_condition: Option<String>,
}

impl Patient {
    /// Creates a new patient record with an empty medical history and no
    /// current condition.
    pub fn new(id: PatientId, name: String, age: u32) -> Self {
        Patient {
            id,
            name,
            age,
            medical_history: Vec::new(),
            current_condition: None,
        }
    }

    /// Creates a patient record with the full set of attributes.
    pub fn with_details(
        id: PatientId,
        name: String,
        age: u32,
        medical_history: Vec<String>,
        current_condition: Option<String>,
    ) -> Self {
        Patient {
            id,
            name,
            age,
            medical_history,
            current_condition,
        }
    }

    /// Appends one entry to the medical history.
    pub fn push_history(&mut self, entry: String) {
        self.medical_history.push(entry);
    }

    /// Sets the current condition; latest write wins, `None` clears it.
    pub fn set_condition(&mut self, condition: Option<String>) {
        self.current_condition = condition;
    }
}
