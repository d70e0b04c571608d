//! Proyección de stages: derivación de sólo-lectura del progreso de grano
//! grueso a partir de la historia de steps de la rama activa.
//!
//! El motor no conoce los stages; las definiciones (conjuntos de páginas de
//! inicio y fin) las aporta el caller en cada consulta.

use crate::engine::core::Journey;
use crate::model::{StageDefinition, StageStatus, Step};

impl Journey {
    /// Proyecta cada definición sobre la rama activa. Los stages cuyo inicio
    /// no aparece en la historia quedan fuera del resultado (no iniciados).
    pub fn stage_status(&self, definitions: &[StageDefinition]) -> Vec<StageStatus> {
        definitions.iter()
                   .filter_map(|d| self.project_stage(d))
                   .collect()
    }

    fn project_stage(&self, definition: &StageDefinition) -> Option<StageStatus> {
        let steps = &self.active_branch().steps;

        // step más temprano cuyo current está en el conjunto de inicio
        let start = steps.iter()
                         .find(|s| definition.start_page_keys.contains(&s.current_page_key))?;

        // fin cualificado: el step alcanzó una página del conjunto de fin con
        // submission confirmada
        let end = steps.iter()
                       .find(|s| definition.end_page_keys.contains(&s.next_page_key)
                                 && s.submit_date.is_some());

        Some(match end {
            Some(end_step) => StageStatus { stage: definition.stage.clone(),
                                            in_progress: false,
                                            completed_date: end_step.submit_date,
                                            first_page_key: None },
            None => StageStatus { stage: definition.stage.clone(),
                                  in_progress: true,
                                  completed_date: None,
                                  first_page_key: resume_page(start) },
        })
    }
}

/// La página de reanudación sólo se reporta cuando el step de inicio tiene
/// submission confirmada (la UI no puede retomar desde un step nunca enviado).
fn resume_page(start: &Step) -> Option<String> {
    start.submit_date
         .is_some()
         .then(|| start.current_page_key.clone())
}
