// models/src/summary.rs

use serde::{Deserialize, Serialize};

use crate::identifiers::DoctorId;

/// Fallback text shown in the appointment details of a patient who was never
/// scheduled.
pub const NOT_SCHEDULED: &str = "Not scheduled";

/// A point-in-time summary of one patient.
///
/// `doctor` is `None` when the patient was never scheduled, which is distinct
/// from the `NOT_SCHEDULED` fallback string carried in `appointment_details`.
/// The two fields deliberately show the same assignment; collapsing them
/// would change the observable output structure.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub name: String,
    pub age: u32,
    pub doctor: Option<DoctorId>,
    pub appointment_details: String,
    /// Medications ever issued to this patient, in issuance order, repeats
    /// kept.
    pub medications: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{PatientSummary, NOT_SCHEDULED};
    use crate::identifiers::DoctorId;
    use serde_json::json;

    #[test]
    fn should_serialize_scheduled_summary() {
        let summary = PatientSummary {
            name: "Fatma Baharoon".to_string(),
            age: 18,
            doctor: Some(DoctorId::new("D001".to_string()).unwrap()),
            appointment_details: "D001".to_string(),
            medications: vec!["Ibuprofen".to_string()],
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Fatma Baharoon",
                "age": 18,
                "doctor": "D001",
                "appointment_details": "D001",
                "medications": ["Ibuprofen"],
            })
        );
    }

    #[test]
    fn should_serialize_unscheduled_summary_with_fallback_text() {
        let summary = PatientSummary {
            name: "Roudha Ahli".to_string(),
            age: 19,
            doctor: None,
            appointment_details: NOT_SCHEDULED.to_string(),
            medications: Vec::new(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["doctor"], json!(null));
        assert_eq!(value["appointment_details"], json!("Not scheduled"));
    }
}
