//! Errores del motor de journeys (valores, nunca panics para condiciones de
//! negocio).
//!
//! Las violaciones estructurales (cero ramas activas, rama sin steps) son
//! errores de programación: el motor hace panic con mensaje descriptivo en
//! lugar de devolverlas como `JourneyError`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum JourneyError {
    /// La submission no parte de la posición registrada del journey ni de una
    /// página ya visitada.
    #[error("invalid current page key")]
    InvalidCurrentPageKey,
    /// Restricción de variante: la operación no existe para este tipo de
    /// journey (p. ej. bereavement rechaza question forms).
    #[error("operation not supported for this journey type")]
    NotSupported,
}
