//! Journey genérico: el wrapper mínimo sobre el motor, sin campos de dominio
//! extra. Soporta todas las operaciones del motor, incluidas las libres
//! (question forms, update de steps).

use chrono::{DateTime, Utc};
use journey_core::Journey;
use serde::{Deserialize, Serialize};

use crate::variant::JourneyVariant;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericJourney {
    journey: Journey,
}

impl GenericJourney {
    #[allow(clippy::too_many_arguments)]
    pub fn create(business_group: &str,
                  reference_number: &str,
                  journey_type: &str,
                  current_page_key: &str,
                  next_page_key: &str,
                  remove_on_login: bool,
                  status: Option<&str>,
                  start_date: DateTime<Utc>,
                  expiration_date: Option<DateTime<Utc>>)
                  -> Self {
        Self { journey: Journey::create(business_group,
                                        reference_number,
                                        journey_type,
                                        current_page_key,
                                        next_page_key,
                                        remove_on_login,
                                        status,
                                        start_date,
                                        expiration_date) }
    }
}

impl JourneyVariant for GenericJourney {
    fn journey(&self) -> &Journey {
        &self.journey
    }

    fn journey_mut(&mut self) -> &mut Journey {
        &mut self.journey
    }
}
