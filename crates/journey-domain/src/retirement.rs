//! Journey de retirement: adjunta la referencia al cálculo de pensión sobre
//! el que el member está cotizando y la quote seleccionada.

use chrono::{DateTime, Utc};
use journey_core::Journey;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::variant::JourneyVariant;

/// Estado inicial del camino retirement-application.
pub const STATUS_STARTED_RA: &str = "StartedRA";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementJourney {
    journey: Journey,
    /// Cálculo vinculado (identificador del sistema de cálculos).
    calculation_reference: Option<String>,
    /// Etiqueta de la quote elegida por el member (p. ej. "fullPension").
    selected_quote_name: Option<String>,
}

impl RetirementJourney {
    pub fn create(business_group: &str,
                  reference_number: &str,
                  current_page_key: &str,
                  next_page_key: &str,
                  start_date: DateTime<Utc>,
                  expiration_date: Option<DateTime<Utc>>)
                  -> Self {
        Self { journey: Journey::create(business_group,
                                        reference_number,
                                        "retirement",
                                        current_page_key,
                                        next_page_key,
                                        false,
                                        Some(STATUS_STARTED_RA),
                                        start_date,
                                        expiration_date),
               calculation_reference: None,
               selected_quote_name: None }
    }

    pub fn calculation_reference(&self) -> Option<&str> {
        self.calculation_reference.as_deref()
    }

    pub fn link_calculation(&mut self, reference: &str) -> Result<(), DomainError> {
        if reference.trim().is_empty() {
            return Err(DomainError::Validation("calculation reference cannot be empty".to_string()));
        }
        self.calculation_reference = Some(reference.to_string());
        Ok(())
    }

    pub fn selected_quote_name(&self) -> Option<&str> {
        self.selected_quote_name.as_deref()
    }

    pub fn select_quote(&mut self, quote_name: &str) -> Result<(), DomainError> {
        if quote_name.trim().is_empty() {
            return Err(DomainError::Validation("quote name cannot be empty".to_string()));
        }
        self.selected_quote_name = Some(quote_name.to_string());
        Ok(())
    }
}

impl JourneyVariant for RetirementJourney {
    fn journey(&self) -> &Journey {
        &self.journey
    }

    fn journey_mut(&mut self) -> &mut Journey {
        &mut self.journey
    }
}
