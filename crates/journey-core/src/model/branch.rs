//! Branch: una secuencia ordenada y append-only de steps que representa un
//! camino completo desde el inicio del journey hasta algún punto.
//!
//! Invariantes:
//! - `steps` nunca está vacío (toda rama nace con al menos un step).
//! - Los `sequence_number` de los steps son 1-based y sin huecos.
//! - Los `current_page_key` son únicos dentro de la rama; es exactamente esta
//!   unicidad la que obliga al motor a ramificar en lugar de mutar en sitio
//!   cuando una submission contradice la historia.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::FIRST_STEP_SEQUENCE;
use crate::model::step::{QuestionForm, Step};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Único dentro del journey; crece monotónicamente al *crear* ramas. Un
    /// merge no acuña número nuevo: conserva el de la rama activa previa.
    pub sequence_number: u32,
    pub is_active: bool,
    pub steps: Vec<Step>,
}

impl Branch {
    /// Crea una rama nueva con su step inicial.
    pub fn new(sequence_number: u32, first_step: Step) -> Self {
        Self { sequence_number,
               is_active: true,
               steps: vec![first_step] }
    }

    /// Último step de la rama. Panic si la rama está vacía: eso es una
    /// violación estructural, no una condición de negocio.
    pub fn last_step(&self) -> &Step {
        self.steps.last().expect("journey invariant broken: branch with zero steps")
    }

    pub fn last_step_mut(&mut self) -> &mut Step {
        self.steps.last_mut().expect("journey invariant broken: branch with zero steps")
    }

    pub fn first_step(&self) -> &Step {
        self.steps.first().expect("journey invariant broken: branch with zero steps")
    }

    /// Posición del step con ese `current_page_key`, si la página ya fue
    /// visitada en esta rama.
    pub fn position_of(&self, current_page_key: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.current_page_key == current_page_key)
    }

    pub fn step_by_key(&self, current_page_key: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.current_page_key == current_page_key)
    }

    pub fn step_by_key_mut(&mut self, current_page_key: &str) -> Option<&mut Step> {
        self.steps.iter_mut().find(|s| s.current_page_key == current_page_key)
    }

    /// Step que coincide en ambas claves (se usa para renovar `update_date`).
    pub fn step_by_transition_mut(&mut self,
                                  current_page_key: &str,
                                  next_page_key: &str)
                                  -> Option<&mut Step> {
        self.steps
            .iter_mut()
            .find(|s| s.current_page_key == current_page_key && s.next_page_key == next_page_key)
    }

    pub fn contains_page(&self, current_page_key: &str) -> bool {
        self.position_of(current_page_key).is_some()
    }

    /// Añade un step nuevo al final con el siguiente número de secuencia.
    pub fn append_step(&mut self,
                       current_page_key: &str,
                       next_page_key: &str,
                       submit_date: DateTime<Utc>,
                       question_form: Option<QuestionForm>)
                       -> &mut Step {
        let seq = self.steps.len() as u32 + FIRST_STEP_SEQUENCE;
        self.steps.push(Step::new(seq, current_page_key, next_page_key, submit_date, question_form));
        self.last_step_mut()
    }

    /// Clon estructural de los steps desde el inicio hasta `through` inclusive,
    /// como rama nueva (activa) con `sequence_number` propio. La copia es
    /// profunda: generic data y checkboxes quedan desacoplados de la rama de
    /// origen.
    pub fn clone_through(&self, through: usize, sequence_number: u32) -> Branch {
        debug_assert!(through < self.steps.len(), "clone_through out of range");
        Branch { sequence_number,
                 is_active: true,
                 steps: self.steps[..=through].to_vec() }
    }

    /// Añade (clonando) una cola de steps ajena, re-secuenciando para mantener
    /// la numeración 1-based sin huecos.
    pub fn append_tail(&mut self, tail: &[Step]) {
        self.steps.extend_from_slice(tail);
        self.resequence();
    }

    fn resequence(&mut self) {
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.sequence_number = i as u32 + FIRST_STEP_SEQUENCE;
        }
    }
}
