use journey_core::JourneyError;
use journey_domain::DomainError;
use thiserror::Error;

/// Error de nivel aplicación: unifica los errores del motor y de las
/// variantes para los consumidores (demos, futuros controllers).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("journey engine error: {0}")]
    Journey(#[from] JourneyError),
    #[error("journey domain error: {0}")]
    Domain(#[from] DomainError),
}
