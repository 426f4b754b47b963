// models/src/errors.rs

pub use thiserror::Error;

/// Errors surfaced by registry operations.
///
/// The taxonomy is deliberately small: not-found outcomes are signaled
/// through return values (`bool`, `Option`) rather than errors, so the only
/// hard failures are the field-update rejections below.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// `update_patient` was given an attribute name it does not recognize.
    /// Only the known mutable fields are accepted; arbitrary attribute
    /// assignment is rejected.
    #[error("unknown patient field: {0}")]
    InvalidField(String),
    /// A recognized field was given a value of the wrong shape.
    #[error("invalid value for field '{field}': expected {expected}")]
    InvalidFieldValue {
        field: String,
        expected: &'static str,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A validation error.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// An identifier has an invalid length.
    #[error("identifier has invalid length")]
    InvalidIdentifierLength,
}

/// A type alias for a `Result` that returns a `RegistryError` on failure.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
