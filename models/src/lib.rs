// models/src/lib.rs

//! Shared domain types for the patient record system. This crate carries no
//! business logic; the registry and CLI crates build on the types and error
//! taxonomy defined here.

pub mod doctor;
pub mod errors;
pub mod identifiers;
pub mod patient;
pub mod prescription;
pub mod summary;

// Explicit re-exports so downstream crates can use short paths
// (e.g. `models::PatientId` instead of `models::identifiers::PatientId`).
pub use crate::doctor::Doctor;
pub use crate::errors::{RegistryError, RegistryResult, ValidationError, ValidationResult};
pub use crate::identifiers::{DoctorId, PatientId};
pub use crate::patient::Patient;
pub use crate::prescription::Prescription;
pub use crate::summary::{PatientSummary, NOT_SCHEDULED};
