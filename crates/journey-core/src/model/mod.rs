//! Modelos del grafo de navegación (Step, Branch, stages).

pub mod branch;
pub mod stage;
pub mod step;

pub use branch::Branch;
pub use stage::{StageDefinition, StageStatus};
pub use step::{Checkbox, CheckboxesList, QuestionForm, Step};
