//! journey-core: motor del grafo de navegación (branch/step) de los journeys.
//!
//! Registra la navegación de un member como un grafo de ramas mergeables:
//! crea una rama nueva cuando el member diverge de la historia registrada,
//! empalma el resto de un camino antiguo cuando reconverge, y arrastra toda la
//! captura por step (respuestas, payloads de forms, checkboxes) a través de
//! esos cambios estructurales sin pérdida ni duplicación.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod model;

pub use engine::Journey;
pub use errors::JourneyError;
pub use model::{Branch, Checkbox, CheckboxesList, QuestionForm, StageDefinition, StageStatus, Step};
