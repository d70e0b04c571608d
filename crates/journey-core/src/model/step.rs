//! Step: una transición página-a-página registrada, con los datos capturados
//! mientras el member estaba en ella.
//!
//! Un `Step` es neutral respecto al contenido de los formularios:
//! - `generic_data` es un mapa form-key -> JSON opaco; el motor no interpreta
//!   su semántica (el conjunto de forms es abierto y pertenece al caller).
//! - `checkboxes_lists` son grupos de checkboxes con orden estable.
//! - `question_form` admite a lo sumo una pregunta respondida por step.
//!
//! El clonado de un `Step` es una copia profunda (los contenedores derivan
//! `Clone` valor a valor), que es exactamente lo que la creación de ramas
//! necesita para que dos ramas evolucionen de forma independiente.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pregunta respondida capturada en un step (a lo sumo una por step).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionForm {
    pub question_key: String,
    pub answer_key: String,
    pub answer_value: String,
}

impl QuestionForm {
    pub fn new(question_key: &str, answer_key: &str, answer_value: &str) -> Self {
        Self { question_key: question_key.to_string(),
               answer_key: answer_key.to_string(),
               answer_value: answer_value.to_string() }
    }
}

/// Una marca de checkbox individual dentro de un grupo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkbox {
    pub key: String,
    pub answer_value: bool,
}

impl Checkbox {
    pub fn new(key: &str, answer_value: bool) -> Self {
        Self { key: key.to_string(), answer_value }
    }
}

/// Grupo nombrado de checkboxes; un step puede tener varios grupos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxesList {
    pub key: String,
    pub checkboxes: Vec<Checkbox>,
}

impl CheckboxesList {
    pub fn new(key: &str, checkboxes: Vec<Checkbox>) -> Self {
        Self { key: key.to_string(), checkboxes }
    }

    /// Valor de un checkbox del grupo, si existe.
    pub fn checkbox_value(&self, checkbox_key: &str) -> Option<bool> {
        self.checkboxes
            .iter()
            .find(|c| c.key == checkbox_key)
            .map(|c| c.answer_value)
    }
}

/// Transición registrada `current_page_key -> next_page_key` más la captura
/// asociada.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Posición 1-based dentro de su rama, sin huecos.
    pub sequence_number: u32,
    pub current_page_key: String,
    pub next_page_key: String,
    /// Fecha de la submission que registró este step. El motor siempre
    /// escribe `Some`; `None` sólo aparece en aggregates cargados de storage
    /// con steps que el member nunca llegó a confirmar, y la proyección de
    /// stages los excluye.
    #[serde(default)]
    pub submit_date: Option<DateTime<Utc>>,
    /// Renovable de forma independiente a `submit_date` (pings "sigo aquí").
    pub update_date: DateTime<Utc>,
    pub question_form: Option<QuestionForm>,
    /// form key -> payload JSON opaco; el orden de inserción es observable.
    pub generic_data: IndexMap<String, Value>,
    pub checkboxes_lists: Vec<CheckboxesList>,
}

impl Step {
    pub fn new(sequence_number: u32,
               current_page_key: &str,
               next_page_key: &str,
               submit_date: DateTime<Utc>,
               question_form: Option<QuestionForm>)
               -> Self {
        Self { sequence_number,
               current_page_key: current_page_key.to_string(),
               next_page_key: next_page_key.to_string(),
               submit_date: Some(submit_date),
               update_date: submit_date,
               question_form,
               generic_data: IndexMap::new(),
               checkboxes_lists: Vec::new() }
    }

    /// Sobrescribe la transición en sitio (camino "overwrite" del motor).
    /// No toca `generic_data` ni `checkboxes_lists`: la captura ya adjunta al
    /// step pertenece a la página, no a la transición elegida.
    pub fn overwrite_transition(&mut self,
                                next_page_key: &str,
                                submit_date: DateTime<Utc>,
                                question_form: Option<QuestionForm>) {
        self.next_page_key = next_page_key.to_string();
        self.submit_date = Some(submit_date);
        self.update_date = submit_date;
        if question_form.is_some() {
            self.question_form = question_form;
        }
    }

    /// Upsert del payload de un form key (sobrescribe si ya existe).
    pub fn update_generic_data(&mut self, form_key: &str, payload: Value) {
        self.generic_data.insert(form_key.to_string(), payload);
    }

    pub fn generic_data_by_form_key(&self, form_key: &str) -> Option<&Value> {
        self.generic_data.get(form_key)
    }

    /// Añade un grupo de checkboxes; se permiten varios grupos por step.
    pub fn add_checkboxes_list(&mut self, list: CheckboxesList) {
        self.checkboxes_lists.push(list);
    }

    pub fn checkboxes_list(&self, list_key: &str) -> Option<&CheckboxesList> {
        self.checkboxes_lists.iter().find(|l| l.key == list_key)
    }

    /// Renueva sólo `update_date`; `submit_date` queda intacto.
    pub fn renew_update_date(&mut self, date: DateTime<Utc>) {
        self.update_date = date;
    }
}
