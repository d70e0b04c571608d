//! Journey: aggregate y algoritmo de submit/branch/merge.
//!
//! Rol en el sistema:
//! - El caller (capa de aplicación) carga el aggregate completo, invoca una
//!   mutación y lo re-persiste entero. El motor nunca habla con storage ni
//!   red.
//! - El motor no decide qué página sigue a cuál: `next_page_key` lo aporta el
//!   caller en cada submission. Aquí sólo se registra la navegación como un
//!   grafo de ramas mergeables.
//!
//! Invariantes del aggregate:
//! - Exactamente una rama tiene `is_active == true` en todo momento.
//! - La posición actual del journey es el `next_page_key` del último step de
//!   la rama activa.
//! - Dentro de una rama los `current_page_key` son únicos.
//!
//! Violar cualquiera de estos invariantes es un error de programación: los
//! accessors internos hacen panic en lugar de devolver `JourneyError`.

use chrono::{DateTime, Utc};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{FIRST_BRANCH_SEQUENCE, STATUS_EXPIRED, STATUS_STARTED, STATUS_SUBMITTED,
                       WORDING_FLAG_SEPARATOR};
use crate::errors::JourneyError;
use crate::model::{Branch, CheckboxesList, QuestionForm, Step};

/// Aggregate raíz: un journey de un member, con su historia de navegación
/// completa (todas las ramas).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journey {
    business_group: String,
    reference_number: String,
    journey_type: String,
    start_date: DateTime<Utc>,
    expiration_date: Option<DateTime<Utc>>,
    submission_date: Option<DateTime<Utc>>,
    status: String,
    is_marked_for_removal: bool,
    /// Lista de tags unida por `;`. Ver `set_wording_flags` / `wording_flags`
    /// para la asimetría escritura/lectura.
    wording_flags: Option<String>,
    branches: Vec<Branch>,
}

impl Journey {
    /// Crea un journey con una rama y un step (la transición de entrada).
    #[allow(clippy::too_many_arguments)]
    pub fn create(business_group: &str,
                  reference_number: &str,
                  journey_type: &str,
                  current_page_key: &str,
                  next_page_key: &str,
                  remove_on_login: bool,
                  status: Option<&str>,
                  start_date: DateTime<Utc>,
                  expiration_date: Option<DateTime<Utc>>)
                  -> Self {
        let first = Step::new(crate::constants::FIRST_STEP_SEQUENCE,
                              current_page_key,
                              next_page_key,
                              start_date,
                              None);
        Self { business_group: business_group.to_string(),
               reference_number: reference_number.to_string(),
               journey_type: journey_type.to_string(),
               start_date,
               expiration_date,
               submission_date: None,
               status: status.unwrap_or(STATUS_STARTED).to_string(),
               is_marked_for_removal: remove_on_login,
               wording_flags: None,
               branches: vec![Branch::new(FIRST_BRANCH_SEQUENCE, first)] }
    }

    // ---- identidad y metadatos ----

    pub fn business_group(&self) -> &str {
        &self.business_group
    }

    pub fn reference_number(&self) -> &str {
        &self.reference_number
    }

    pub fn journey_type(&self) -> &str {
        &self.journey_type
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn expiration_date(&self) -> Option<DateTime<Utc>> {
        self.expiration_date
    }

    pub fn submission_date(&self) -> Option<DateTime<Utc>> {
        self.submission_date
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Etiqueta informal de estado; el vocabulario lo ponen las variantes.
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    pub fn is_marked_for_removal(&self) -> bool {
        self.is_marked_for_removal
    }

    pub fn mark_for_removal(&mut self) {
        self.is_marked_for_removal = true;
    }

    // ---- ramas y posición ----

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Rama activa. Panic si el invariante "exactamente una activa" se rompió
    /// en otro sitio.
    pub fn active_branch(&self) -> &Branch {
        self.branches
            .iter()
            .find(|b| b.is_active)
            .expect("journey invariant broken: no active branch")
    }

    fn active_branch_mut(&mut self) -> &mut Branch {
        self.branches
            .iter_mut()
            .find(|b| b.is_active)
            .expect("journey invariant broken: no active branch")
    }

    fn active_index(&self) -> usize {
        self.branches
            .iter()
            .position(|b| b.is_active)
            .expect("journey invariant broken: no active branch")
    }

    /// Posición actual: `next_page_key` del último step de la rama activa.
    pub fn current_position(&self) -> &str {
        &self.active_branch().last_step().next_page_key
    }

    pub fn first_step(&self) -> &Step {
        self.active_branch().first_step()
    }

    pub fn last_step(&self) -> &Step {
        self.active_branch().last_step()
    }

    /// Step de la rama activa con ese `current_page_key`, si existe.
    pub fn step_by_key(&self, page_key: &str) -> Option<&Step> {
        self.active_branch().step_by_key(page_key)
    }

    /// Localiza un step por `current_page_key` en todo el journey: rama activa
    /// primero, después el resto en orden.
    fn locate_step(&self, page_key: &str) -> Option<(usize, usize)> {
        let active = self.active_index();
        if let Some(si) = self.branches[active].position_of(page_key) {
            return Some((active, si));
        }
        self.branches
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != active)
            .find_map(|(i, b)| b.position_of(page_key).map(|si| (i, si)))
    }

    /// ¿Alguna rama registró un step que parte de esta página?
    fn page_recorded(&self, page_key: &str) -> bool {
        self.branches.iter().any(|b| b.contains_page(page_key))
    }

    fn next_branch_sequence(&self) -> u32 {
        self.branches
            .iter()
            .map(|b| b.sequence_number)
            .max()
            .expect("journey invariant broken: journey without branches")
            + 1
    }

    // ---- submission ----

    /// Registra la transición `current_page_key -> next_page_key`.
    ///
    /// Devuelve `Ok(true)` si el estado cambió, `Ok(false)` para la
    /// re-submission idéntica (no-op idempotente) y
    /// `Err(InvalidCurrentPageKey)` si la página de partida no es la posición
    /// actual ni una página ya visitada (en ese caso no muta nada).
    pub fn try_submit_step(&mut self,
                           current_page_key: &str,
                           next_page_key: &str,
                           submit_date: DateTime<Utc>,
                           avoid_branching: bool)
                           -> Result<bool, JourneyError> {
        self.submit_step_internal(current_page_key, next_page_key, submit_date, None, avoid_branching)
    }

    /// Variante con pregunta respondida adjunta al step resultante.
    pub fn try_submit_step_with_question(&mut self,
                                         current_page_key: &str,
                                         next_page_key: &str,
                                         submit_date: DateTime<Utc>,
                                         question_form: QuestionForm,
                                         avoid_branching: bool)
                                         -> Result<bool, JourneyError> {
        self.submit_step_internal(current_page_key,
                                  next_page_key,
                                  submit_date,
                                  Some(question_form),
                                  avoid_branching)
    }

    fn submit_step_internal(&mut self,
                            current_page_key: &str,
                            next_page_key: &str,
                            submit_date: DateTime<Utc>,
                            question_form: Option<QuestionForm>,
                            avoid_branching: bool)
                            -> Result<bool, JourneyError> {
        let matched = self.locate_step(current_page_key);
        if matched.is_none() && self.current_position() != current_page_key {
            return Err(JourneyError::InvalidCurrentPageKey);
        }

        match matched {
            // Página fresca: nadie partió nunca de ella -> append en la rama
            // activa.
            None => {
                self.active_branch_mut()
                    .append_step(current_page_key, next_page_key, submit_date, question_form);
                trace!("journey {}: appended {} -> {}",
                       self.reference_number, current_page_key, next_page_key);
            }
            Some((bi, si)) => {
                if self.branches[bi].steps[si].next_page_key == next_page_key
                   && self.branches[bi].is_active
                {
                    // Re-submission de la misma transición en el camino
                    // activo: no-op idempotente. La misma transición en una
                    // rama abandonada NO es un no-op: es el member volviendo
                    // al camino original, y cae en branch + merge más abajo.
                    trace!("journey {}: resubmission of {} -> {} ignored",
                           self.reference_number, current_page_key, next_page_key);
                    return Ok(false);
                }

                let in_active = self.branches[bi].is_active;
                let at_tip = si + 1 == self.branches[bi].steps.len();
                let old_next = self.branches[bi].steps[si].next_page_key.clone();

                // Política overwrite-vs-branch (ver DESIGN.md): se sobrescribe
                // en sitio sólo sobre la rama activa, cuando el caller lo
                // fuerza con `avoid_branching` o cuando el journey es lineal
                // (una sola rama), el match es el tip y nada se construyó
                // sobre el `next_page_key` antiguo.
                let overwritable =
                    in_active
                    && (avoid_branching
                        || (at_tip && self.branches.len() == 1 && !self.page_recorded(&old_next)));

                if overwritable {
                    let branch = self.active_branch_mut();
                    branch.steps.truncate(si + 1);
                    branch.steps[si].overwrite_transition(next_page_key, submit_date, question_form);
                    debug!("journey {}: overwrote step {} ({} -> {}, was -> {})",
                           self.reference_number, si + 1, current_page_key, next_page_key, old_next);
                } else {
                    let seq = self.next_branch_sequence();
                    let mut created = self.branches[bi].clone_through(si, seq);
                    created.last_step_mut()
                           .overwrite_transition(next_page_key, submit_date, question_form);
                    self.active_branch_mut().is_active = false;
                    self.branches.push(created);
                    debug!("journey {}: branched to {} at {} -> {} ({} steps cloned)",
                           self.reference_number, seq, current_page_key, next_page_key, si + 1);
                }
            }
        }

        self.try_merge(next_page_key);
        Ok(true)
    }

    /// Reconvergencia: si el step recién registrado apunta a una página que
    /// es `current_page_key` de un step en otra rama, la cola de esa rama se
    /// empalma al final de la activa y todas las demás ramas se descartan.
    /// La rama superviviente conserva el `sequence_number` que estaba activo
    /// inmediatamente antes del merge.
    ///
    /// Una cola sólo cualifica si no repite ningún `current_page_key` ya
    /// presente en la rama activa: empalmarla rompería la unicidad de páginas
    /// dentro de la rama. En ese caso el merge se omite y las ramas siguen
    /// separadas.
    fn try_merge(&mut self, page_key: &str) -> bool {
        let active = self.active_index();
        let active_branch = &self.branches[active];
        let matched = self.branches
                          .iter()
                          .enumerate()
                          .filter(|(i, _)| *i != active)
                          .find_map(|(i, b)| {
                              let si = b.position_of(page_key)?;
                              b.steps[si..]
                               .iter()
                               .all(|s| !active_branch.contains_page(&s.current_page_key))
                               .then_some((i, si))
                          });
        let Some((bi, si)) = matched else {
            return false;
        };

        let tail: Vec<Step> = self.branches[bi].steps[si..].to_vec();
        self.branches[active].append_tail(&tail);
        self.branches.retain(|b| b.is_active);
        debug!("journey {}: merged at {} ({} tail steps), surviving branch {}",
               self.reference_number,
               page_key,
               tail.len(),
               self.active_branch().sequence_number);
        true
    }

    // ---- mutaciones en sitio sobre steps existentes ----

    /// Override del `next_page_key` de un step ya registrado en la rama
    /// activa (operación libre de los journeys genéricos).
    pub fn update_step(&mut self, current_page_key: &str, next_page_key: &str) -> Result<(), JourneyError> {
        let step = self.active_branch_mut()
                       .step_by_key_mut(current_page_key)
                       .ok_or(JourneyError::InvalidCurrentPageKey)?;
        step.next_page_key = next_page_key.to_string();
        Ok(())
    }

    /// Ping "sigo en este step": renueva `update_date` dejando `submit_date`
    /// intacto. El step debe coincidir en ambas claves.
    pub fn renew_step_updated_date(&mut self,
                                   current_page_key: &str,
                                   next_page_key: &str,
                                   date: DateTime<Utc>)
                                   -> Result<(), JourneyError> {
        let step = self.active_branch_mut()
                       .step_by_transition_mut(current_page_key, next_page_key)
                       .ok_or(JourneyError::InvalidCurrentPageKey)?;
        step.renew_update_date(date);
        Ok(())
    }

    /// Upsert del payload de un form en el step de esa página (rama activa).
    pub fn update_generic_data(&mut self,
                               page_key: &str,
                               form_key: &str,
                               payload: Value)
                               -> Result<(), JourneyError> {
        let step = self.active_branch_mut()
                       .step_by_key_mut(page_key)
                       .ok_or(JourneyError::InvalidCurrentPageKey)?;
        step.update_generic_data(form_key, payload);
        Ok(())
    }

    /// Primer payload con ese form key recorriendo la rama activa en orden.
    pub fn generic_data_by_form_key(&self, form_key: &str) -> Option<&Value> {
        self.active_branch()
            .steps
            .iter()
            .find_map(|s| s.generic_data_by_form_key(form_key))
    }

    pub fn add_checkboxes_list(&mut self,
                               page_key: &str,
                               list: CheckboxesList)
                               -> Result<(), JourneyError> {
        let step = self.active_branch_mut()
                       .step_by_key_mut(page_key)
                       .ok_or(JourneyError::InvalidCurrentPageKey)?;
        step.add_checkboxes_list(list);
        Ok(())
    }

    pub fn checkboxes_list(&self, page_key: &str, list_key: &str) -> Option<&CheckboxesList> {
        self.step_by_key(page_key).and_then(|s| s.checkboxes_list(list_key))
    }

    // ---- ciclo de vida ----

    /// Marca el journey como enviado.
    pub fn submit(&mut self, date: DateTime<Utc>) {
        self.submission_date = Some(date);
        self.status = STATUS_SUBMITTED.to_string();
    }

    pub fn set_expired_status(&mut self) {
        self.status = STATUS_EXPIRED.to_string();
    }

    pub fn update_expiry_date(&mut self, date: DateTime<Utc>) {
        self.expiration_date = Some(date);
    }

    /// Un journey sin fecha de expiración nunca expira.
    pub fn is_expired(&self, as_of: DateTime<Utc>) -> bool {
        self.expiration_date.map(|e| e <= as_of).unwrap_or(false)
    }

    // ---- wording flags ----

    /// Serializa la lista de tags unida por `;`. Los tags vacíos se descartan
    /// al escribir; los tags de sólo espacios se conservan (se filtran en la
    /// lectura, no aquí).
    pub fn set_wording_flags(&mut self, flags: &[String]) {
        let kept: Vec<&str> = flags.iter()
                                   .filter(|f| !f.is_empty())
                                   .map(|f| f.as_str())
                                   .collect();
        self.wording_flags = if kept.is_empty() {
            None
        } else {
            Some(kept.join(&WORDING_FLAG_SEPARATOR.to_string()))
        };
    }

    /// Lee la lista de tags filtrando vacíos y tags de sólo espacios.
    pub fn wording_flags(&self) -> Vec<String> {
        self.wording_flags
            .as_deref()
            .map(|joined| {
                joined.split(WORDING_FLAG_SEPARATOR)
                      .filter(|t| !t.trim().is_empty())
                      .map(str::to_string)
                      .collect()
            })
            .unwrap_or_default()
    }

    /// Añade un tag sin reescribir los existentes.
    pub fn append_wording_flag(&mut self, flag: &str) {
        if flag.is_empty() {
            return;
        }
        match &mut self.wording_flags {
            Some(joined) => {
                joined.push(WORDING_FLAG_SEPARATOR);
                joined.push_str(flag);
            }
            None => self.wording_flags = Some(flag.to_string()),
        }
    }

    /// Valor serializado tal cual se persiste (para los tests de asimetría).
    pub fn raw_wording_flags(&self) -> Option<&str> {
        self.wording_flags.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn journey() -> Journey {
        Journey::create("WPS", "0000001", "retirement", "start", "hub", false, None, Utc::now(), None)
    }

    #[test]
    fn create_seeds_one_active_branch_with_one_step() {
        let j = journey();
        assert_eq!(j.branches().len(), 1);
        assert!(j.branches()[0].is_active);
        assert_eq!(j.branches()[0].steps.len(), 1);
        assert_eq!(j.current_position(), "hub");
        assert_eq!(j.status(), STATUS_STARTED);
        assert!(j.first_step().submit_date.is_some());
    }

    #[test]
    fn wording_flags_write_drops_empty_but_keeps_whitespace_tags() {
        let mut j = journey();
        j.set_wording_flags(&["alpha".into(), "".into(), "  ".into(), "beta".into()]);
        // el tag de sólo espacios sobrevive a la escritura...
        assert_eq!(j.raw_wording_flags(), Some("alpha;  ;beta"));
        // ...pero la lectura lo filtra
        assert_eq!(j.wording_flags(), vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn wording_flags_roundtrip_and_append() {
        let mut j = journey();
        j.set_wording_flags(&["one".into()]);
        j.append_wording_flag("two");
        j.append_wording_flag("");
        assert_eq!(j.wording_flags(), vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn set_wording_flags_with_only_empty_tags_clears() {
        let mut j = journey();
        j.set_wording_flags(&["x".into()]);
        j.set_wording_flags(&[]);
        assert_eq!(j.raw_wording_flags(), None);
        assert!(j.wording_flags().is_empty());
    }

    #[test]
    fn expiry_lifecycle() {
        let mut j = journey();
        let now = Utc::now();
        assert!(!j.is_expired(now), "sin expiration_date nunca expira");
        j.update_expiry_date(now - Duration::hours(1));
        assert!(j.is_expired(now));
        j.update_expiry_date(now + Duration::hours(1));
        assert!(!j.is_expired(now));
        j.set_expired_status();
        assert_eq!(j.status(), STATUS_EXPIRED);
    }

    #[test]
    fn submit_sets_date_and_status() {
        let mut j = journey();
        let when = Utc::now();
        j.submit(when);
        assert_eq!(j.submission_date(), Some(when));
        assert_eq!(j.status(), STATUS_SUBMITTED);
    }

    #[test]
    fn update_step_overrides_next_page() {
        let mut j = journey();
        j.update_step("start", "alt_hub").expect("step exists");
        assert_eq!(j.current_position(), "alt_hub");
        assert_eq!(j.update_step("missing", "x"), Err(JourneyError::InvalidCurrentPageKey));
    }
}
