// models/src/prescription.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifiers::PatientId;

/// One entry in the append-only prescription log. Entries are never deleted;
/// a patient may accumulate any number of them, repeats included.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub patient_id: PatientId,
    pub medication: String,
    pub issued_at: DateTime<Utc>,
}

impl Prescription {
    /// Creates a log entry stamped with the current UTC time.
    pub fn new(patient_id: PatientId, medication: String) -> Self {
        Prescription {
            patient_id,
            medication,
            issued_at: Utc::now(),
        }
    }
}
