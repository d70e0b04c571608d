//! Catálogo de definiciones de stage que la UI usa para reportar progreso.
//! El motor no conoce los stages; estas definiciones se le pasan en cada
//! consulta de `stage_status`.

use journey_core::StageDefinition;

/// Stages del camino de retirement: datos personales, quotes y revisión
/// final. Las páginas `.1`/`.2` son las variantes alternativas que el member
/// puede alcanzar al re-navegar.
pub fn retirement_stages() -> Vec<StageDefinition> {
    vec![StageDefinition::new("about_you", &["step1"], &["step3", "step3.1"]),
         StageDefinition::new("your_quotes", &["step3", "step3.1"], &["step6", "step6.2"]),
         StageDefinition::new("review_and_submit", &["step6", "step6.2"], &["step8"])]
}

/// Stages del fast-track de bereavement.
pub fn bereavement_stages() -> Vec<StageDefinition> {
    vec![StageDefinition::new("verification", &["verify"], &["details"]),
         StageDefinition::new("case_details", &["details"], &["confirmation"])]
}
