//! Conjunto cerrado de variantes de journey.
//!
//! Las cuatro variantes comparten el motor genérico (componen un `Journey` de
//! `journey-core`); difieren en los campos de dominio que adjuntan, en su
//! vocabulario de estados y en qué operaciones del motor admiten. Las
//! operaciones no admitidas devuelven `JourneyError::NotSupported` como
//! valor, nunca panic.

use chrono::{DateTime, Utc};
use journey_core::{Journey, JourneyError, QuestionForm};
use serde::{Deserialize, Serialize};

use crate::bereavement::BereavementJourney;
use crate::generic::GenericJourney;
use crate::retirement::RetirementJourney;
use crate::transfer::TransferJourney;

/// Acceso común al aggregate subyacente más las operaciones delegadas que
/// cada variante puede restringir.
pub trait JourneyVariant {
    fn journey(&self) -> &Journey;
    fn journey_mut(&mut self) -> &mut Journey;

    fn try_submit_step(&mut self,
                       current_page_key: &str,
                       next_page_key: &str,
                       submit_date: DateTime<Utc>,
                       avoid_branching: bool)
                       -> Result<bool, JourneyError> {
        self.journey_mut()
            .try_submit_step(current_page_key, next_page_key, submit_date, avoid_branching)
    }

    fn try_submit_step_with_question(&mut self,
                                     current_page_key: &str,
                                     next_page_key: &str,
                                     submit_date: DateTime<Utc>,
                                     question_form: QuestionForm,
                                     avoid_branching: bool)
                                     -> Result<bool, JourneyError> {
        self.journey_mut().try_submit_step_with_question(current_page_key,
                                                         next_page_key,
                                                         submit_date,
                                                         question_form,
                                                         avoid_branching)
    }

    fn update_step(&mut self, current_page_key: &str, next_page_key: &str) -> Result<(), JourneyError> {
        self.journey_mut().update_step(current_page_key, next_page_key)
    }
}

/// Dispatch sobre el conjunto cerrado de variantes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MemberJourney {
    Generic(GenericJourney),
    Transfer(TransferJourney),
    Retirement(RetirementJourney),
    Bereavement(BereavementJourney),
}

impl MemberJourney {
    pub fn journey(&self) -> &Journey {
        match self {
            MemberJourney::Generic(j) => j.journey(),
            MemberJourney::Transfer(j) => j.journey(),
            MemberJourney::Retirement(j) => j.journey(),
            MemberJourney::Bereavement(j) => j.journey(),
        }
    }

    pub fn journey_mut(&mut self) -> &mut Journey {
        match self {
            MemberJourney::Generic(j) => j.journey_mut(),
            MemberJourney::Transfer(j) => j.journey_mut(),
            MemberJourney::Retirement(j) => j.journey_mut(),
            MemberJourney::Bereavement(j) => j.journey_mut(),
        }
    }

    pub fn try_submit_step(&mut self,
                           current_page_key: &str,
                           next_page_key: &str,
                           submit_date: DateTime<Utc>,
                           avoid_branching: bool)
                           -> Result<bool, JourneyError> {
        match self {
            MemberJourney::Generic(j) => {
                j.try_submit_step(current_page_key, next_page_key, submit_date, avoid_branching)
            }
            MemberJourney::Transfer(j) => {
                j.try_submit_step(current_page_key, next_page_key, submit_date, avoid_branching)
            }
            MemberJourney::Retirement(j) => {
                j.try_submit_step(current_page_key, next_page_key, submit_date, avoid_branching)
            }
            MemberJourney::Bereavement(j) => {
                j.try_submit_step(current_page_key, next_page_key, submit_date, avoid_branching)
            }
        }
    }

    pub fn try_submit_step_with_question(&mut self,
                                         current_page_key: &str,
                                         next_page_key: &str,
                                         submit_date: DateTime<Utc>,
                                         question_form: QuestionForm,
                                         avoid_branching: bool)
                                         -> Result<bool, JourneyError> {
        match self {
            MemberJourney::Generic(j) => j.try_submit_step_with_question(current_page_key,
                                                                         next_page_key,
                                                                         submit_date,
                                                                         question_form,
                                                                         avoid_branching),
            MemberJourney::Transfer(j) => j.try_submit_step_with_question(current_page_key,
                                                                          next_page_key,
                                                                          submit_date,
                                                                          question_form,
                                                                          avoid_branching),
            MemberJourney::Retirement(j) => j.try_submit_step_with_question(current_page_key,
                                                                            next_page_key,
                                                                            submit_date,
                                                                            question_form,
                                                                            avoid_branching),
            MemberJourney::Bereavement(j) => j.try_submit_step_with_question(current_page_key,
                                                                             next_page_key,
                                                                             submit_date,
                                                                             question_form,
                                                                             avoid_branching),
        }
    }

    pub fn update_step(&mut self, current_page_key: &str, next_page_key: &str) -> Result<(), JourneyError> {
        match self {
            MemberJourney::Generic(j) => j.update_step(current_page_key, next_page_key),
            MemberJourney::Transfer(j) => j.update_step(current_page_key, next_page_key),
            MemberJourney::Retirement(j) => j.update_step(current_page_key, next_page_key),
            MemberJourney::Bereavement(j) => j.update_step(current_page_key, next_page_key),
        }
    }
}
