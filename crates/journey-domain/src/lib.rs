//! journey-domain: variantes de journey (generic, transfer, retirement,
//! bereavement) construidas sobre el motor de `journey-core`.
//!
//! Cada variante compone un `Journey` y añade sus campos de dominio; las
//! restricciones por tipo se expresan devolviendo `NotSupported`, nunca con
//! panics.

pub mod bereavement;
pub mod errors;
pub mod generic;
pub mod retirement;
pub mod transfer;
pub mod variant;

pub use bereavement::BereavementJourney;
pub use errors::DomainError;
pub use generic::GenericJourney;
pub use retirement::{RetirementJourney, STATUS_STARTED_RA};
pub use transfer::{TransferJourney, STATUS_SUBMIT_STARTED};
pub use variant::{JourneyVariant, MemberJourney};
