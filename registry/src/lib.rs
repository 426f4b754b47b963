// registry/src/lib.rs

//! The in-memory patient registry: four co-located collections (patient
//! records, appointment assignments, the FIFO consultation queue, and the
//! append-only prescription log) keyed by a shared patient identifier.
//!
//! All state is transient per process run; persistence and concurrent access
//! are out of scope. Every operation is a single-step mutation with no
//! intermediate states.

pub mod registry;
pub mod update;

pub use crate::registry::PatientRegistry;
pub use crate::update::PatientUpdate;

// Re-export the shared domain types so callers only need this crate.
pub use models::{Doctor, DoctorId, Patient, PatientId, PatientSummary, Prescription};
pub use models::errors::{RegistryError, RegistryResult, ValidationError, ValidationResult};
