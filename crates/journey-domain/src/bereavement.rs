//! Journey de bereavement: identificado por un GUID de caso (no por el par
//! business group / reference number) y con la secuencia de páginas cerrada.
//!
//! Al ser un fast-track fijo y no un árbol de formularios abierto, las
//! operaciones libres del motor (question forms, override de steps) no
//! existen aquí: devuelven `NotSupported` sin mutar nada.

use chrono::{DateTime, Utc};
use journey_core::{Journey, JourneyError, QuestionForm};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::variant::JourneyVariant;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BereavementJourney {
    /// Referencia del caso de bereavement.
    reference: Uuid,
    journey: Journey,
}

impl BereavementJourney {
    pub fn create(business_group: &str,
                  current_page_key: &str,
                  next_page_key: &str,
                  start_date: DateTime<Utc>,
                  expiration_date: Option<DateTime<Utc>>)
                  -> Self {
        let reference = Uuid::new_v4();
        Self { reference,
               journey: Journey::create(business_group,
                                        &reference.to_string(),
                                        "bereavement",
                                        current_page_key,
                                        next_page_key,
                                        false,
                                        None,
                                        start_date,
                                        expiration_date) }
    }

    pub fn reference(&self) -> Uuid {
        self.reference
    }
}

impl JourneyVariant for BereavementJourney {
    fn journey(&self) -> &Journey {
        &self.journey
    }

    fn journey_mut(&mut self) -> &mut Journey {
        &mut self.journey
    }

    /// Restricción de variante: el fast-track no captura question forms.
    fn try_submit_step_with_question(&mut self,
                                     _current_page_key: &str,
                                     _next_page_key: &str,
                                     _submit_date: DateTime<Utc>,
                                     _question_form: QuestionForm,
                                     _avoid_branching: bool)
                                     -> Result<bool, JourneyError> {
        Err(JourneyError::NotSupported)
    }

    /// Restricción de variante: los steps del fast-track no se sobreescriben
    /// libremente.
    fn update_step(&mut self, _current_page_key: &str, _next_page_key: &str) -> Result<(), JourneyError> {
        Err(JourneyError::NotSupported)
    }
}
