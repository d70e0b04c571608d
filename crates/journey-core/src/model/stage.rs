//! Tipos de la proyección de stages: agrupaciones de páginas de grano grueso
//! sobre las que la UI reporta progreso (no iniciado / en progreso /
//! completado).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Definición de un stage: nombre más los conjuntos de páginas candidatas de
/// inicio y de fin. La definición la aporta el caller; el motor sólo proyecta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDefinition {
    pub stage: String,
    pub start_page_keys: Vec<String>,
    pub end_page_keys: Vec<String>,
}

impl StageDefinition {
    pub fn new(stage: &str, start_page_keys: &[&str], end_page_keys: &[&str]) -> Self {
        Self { stage: stage.to_string(),
               start_page_keys: start_page_keys.iter().map(|k| k.to_string()).collect(),
               end_page_keys: end_page_keys.iter().map(|k| k.to_string()).collect() }
    }
}

/// Resultado de proyectar un stage sobre la historia de steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStatus {
    pub stage: String,
    pub in_progress: bool,
    pub completed_date: Option<DateTime<Utc>>,
    /// Página en la que la UI debe retomar el stage; sólo se reporta cuando el
    /// stage está en progreso y su step de inicio tiene submission confirmada.
    pub first_page_key: Option<String>,
}
