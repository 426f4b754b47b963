// models/src/identifiers.rs

use core::ops::Deref;
use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use internment::Intern;

use crate::errors::{ValidationError, ValidationResult};

/// A patient identifier. Identifiers are opaque tokens (255 bytes max) that
/// uniquely name a patient record. The same identifier is shared across the
/// record map, the appointment schedule, the consultation queue, and the
/// prescription log, so the backing string is interned and clones are cheap.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PatientId(pub Intern<String>);

impl PatientId {
    /// Creates a new patient identifier.
    ///
    /// # Arguments
    /// * `value`: The identifier value. The value must be between 1 and 255
    /// bytes in length (inclusive).
    ///
    /// # Errors
    /// Returns a `ValidationError` if the `value` is not between 1 and 255
    /// bytes in length (inclusive).
    pub fn new(value: String) -> ValidationResult<Self> {
        if value.is_empty() || value.len() > u8::MAX as usize {
            return Err(ValidationError::InvalidIdentifierLength);
        }

        Ok(Self(Intern::new(value)))
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl Deref for PatientId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

impl FromStr for PatientId {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s.to_string())
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PatientId> for String {
    fn from(value: PatientId) -> Self {
        value.0.to_string()
    }
}

impl PartialOrd for PatientId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Ord for PatientId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// A doctor identifier. Not validated against any directory by the registry;
/// the appointment schedule stores whatever token the caller supplies.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DoctorId(pub Intern<String>);

impl DoctorId {
    /// Creates a new doctor identifier. The value must be between 1 and 255
    /// bytes in length (inclusive).
    pub fn new(value: String) -> ValidationResult<Self> {
        if value.is_empty() || value.len() > u8::MAX as usize {
            return Err(ValidationError::InvalidIdentifierLength);
        }

        Ok(Self(Intern::new(value)))
    }
}

impl AsRef<str> for DoctorId {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl Deref for DoctorId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

impl FromStr for DoctorId {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s.to_string())
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DoctorId> for String {
    fn from(value: DoctorId) -> Self {
        value.0.to_string()
    }
}

impl PartialOrd for DoctorId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Ord for DoctorId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{DoctorId, PatientId};
    use crate::errors::ValidationError;
    use core::str::FromStr;

    #[test]
    fn should_not_create_empty_patient_id() {
        let id = PatientId::new("".to_string());
        assert!(id.is_err());
        assert_eq!(id.unwrap_err(), ValidationError::InvalidIdentifierLength);
    }

    #[test]
    fn should_not_create_too_long_patient_id() {
        let id = PatientId::new("a".repeat(256));
        assert!(id.is_err());
        assert_eq!(id.unwrap_err(), ValidationError::InvalidIdentifierLength);
    }

    #[test]
    fn should_create_patient_id() {
        let id = PatientId::new("P001".to_string());
        assert!(id.is_ok());
        assert_eq!(id.unwrap().as_ref(), "P001");
    }

    #[test]
    fn should_convert_patient_id_from_str() {
        let id = PatientId::from_str("P001");
        assert!(id.is_ok());
        assert_eq!(id.unwrap().as_ref(), "P001");
    }

    #[test]
    fn should_compare_interned_patient_ids() {
        let a = PatientId::new("P001".to_string()).unwrap();
        let b = PatientId::from_str("P001").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn should_not_create_empty_doctor_id() {
        let id = DoctorId::new("".to_string());
        assert!(id.is_err());
        assert_eq!(id.unwrap_err(), ValidationError::InvalidIdentifierLength);
    }

    #[test]
    fn should_create_doctor_id() {
        let id = DoctorId::from_str("D001");
        assert!(id.is_ok());
        assert_eq!(id.unwrap().as_ref(), "D001");
    }
}
