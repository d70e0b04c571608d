// errors.rs
use journey_core::JourneyError;
use thiserror::Error;

/// Error de dominio de las variantes de journey.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Journey(#[from] JourneyError),
}
