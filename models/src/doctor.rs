// models/src/doctor.rs

use serde::{Deserialize, Serialize};

use crate::identifiers::DoctorId;

/// A doctor: read-only reference data. The registry never mutates doctors
/// and never checks appointment assignments against any doctor directory.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialization: String,
}

impl Doctor {
    pub fn new(id: DoctorId, name: String, specialization: String) -> Self {
        Doctor {
            id,
            name,
            specialization,
        }
    }
}
