// registry/src/update.rs

use models::errors::{RegistryError, RegistryResult};
use models::Patient;
use serde_json::Value;

/// A tagged update to one mutable patient field.
///
/// Only medical history and current condition can change after creation;
/// the identifier, name, and age cannot be updated through this path. Any
/// other field name is rejected with `RegistryError::InvalidField` instead
/// of being assigned blindly.
#[derive(Clone, Debug, PartialEq)]
pub enum PatientUpdate {
    /// Replaces the entire medical history sequence. Replacement, not merge.
    MedicalHistory(Vec<String>),
    /// Replaces the current condition; `None` clears it.
    CurrentCondition(Option<String>),
}

impl PatientUpdate {
    /// Maps a (field name, value) pair onto a tagged update.
    ///
    /// `medical_history` accepts an array of strings, or a single string
    /// treated as a one-entry replacement. `current_condition` accepts a
    /// string or null.
    pub fn parse(field: &str, value: &Value) -> RegistryResult<Self> {
        match field {
            "medical_history" => match value {
                Value::String(entry) => Ok(PatientUpdate::MedicalHistory(vec![entry.clone()])),
                Value::Array(items) => {
                    let mut entries = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::String(entry) => entries.push(entry.clone()),
                            _ => {
                                return Err(RegistryError::InvalidFieldValue {
                                    field: field.to_string(),
                                    expected: "a string or an array of strings",
                                })
                            }
                        }
                    }
                    Ok(PatientUpdate::MedicalHistory(entries))
                }
                _ => Err(RegistryError::InvalidFieldValue {
                    field: field.to_string(),
                    expected: "a string or an array of strings",
                }),
            },
            "current_condition" => match value {
                Value::String(condition) => {
                    Ok(PatientUpdate::CurrentCondition(Some(condition.clone())))
                }
                Value::Null => Ok(PatientUpdate::CurrentCondition(None)),
                _ => Err(RegistryError::InvalidFieldValue {
                    field: field.to_string(),
                    expected: "a string or null",
                }),
            },
            other => Err(RegistryError::InvalidField(other.to_string())),
        }
    }

    /// Replaces the targeted field on the record wholesale.
    pub fn apply(&self, patient: &mut Patient) {
        match self {
            PatientUpdate::MedicalHistory(entries) => {
                patient.medical_history = entries.clone();
            }
            PatientUpdate::CurrentCondition(condition) => {
                patient.current_condition = condition.clone();
            }
        }
    }
}
