//! Journey de transfer-out: adjunta el id del caso de verificación de
//! identidad abierto en el sistema externo.

use chrono::{DateTime, Utc};
use journey_core::Journey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::variant::JourneyVariant;

/// Estado que marca el arranque de la fase de envío del transfer.
pub const STATUS_SUBMIT_STARTED: &str = "SubmitStarted";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferJourney {
    journey: Journey,
    /// Caso de verificación de identidad vinculado, si ya se abrió.
    identity_verification_id: Option<Uuid>,
}

impl TransferJourney {
    pub fn create(business_group: &str,
                  reference_number: &str,
                  current_page_key: &str,
                  next_page_key: &str,
                  start_date: DateTime<Utc>,
                  expiration_date: Option<DateTime<Utc>>)
                  -> Self {
        Self { journey: Journey::create(business_group,
                                        reference_number,
                                        "transfer",
                                        current_page_key,
                                        next_page_key,
                                        false,
                                        None,
                                        start_date,
                                        expiration_date),
               identity_verification_id: None }
    }

    pub fn identity_verification_id(&self) -> Option<Uuid> {
        self.identity_verification_id
    }

    pub fn link_identity_verification(&mut self, id: Uuid) {
        self.identity_verification_id = Some(id);
    }

    /// El envío del transfer pasa por una fase intermedia con estado propio.
    pub fn start_submission(&mut self) {
        self.journey.set_status(STATUS_SUBMIT_STARTED);
    }
}

impl JourneyVariant for TransferJourney {
    fn journey(&self) -> &Journey {
        &self.journey
    }

    fn journey_mut(&mut self) -> &mut Journey {
        &mut self.journey
    }
}
