//! JourneyFlow Rust Library
//!
//! Este crate actúa como la capa de aplicación fina sobre el motor:
//! - Expone `errors` para unificar los errores de motor y dominio.
//! - Expone `stages` con los catálogos de definiciones de stage de cada
//!   camino.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod errors;
pub mod stages;

#[cfg(test)]
mod tests {
    use super::errors::AppError;
    use journey_core::JourneyError;

    #[test]
    fn app_error_wraps_engine_errors() {
        let e: AppError = JourneyError::NotSupported.into();
        assert!(e.to_string().contains("not supported"));
    }
}
