use chrono::Utc;
use journey_core::{Checkbox, CheckboxesList, Journey, JourneyError, QuestionForm};
use journeyflow_rust::stages::retirement_stages;
use serde_json::json;

/// Demo 1: divergencia doble y colapso por merge (el escenario más rico del
/// motor). Imprime la forma del grafo en cada hito.
fn run_branching_demo() {
    let mut journey =
        Journey::create("WPS", "0000001", "retirement", "step0", "step1", false, None, Utc::now(), None);

    for (c, n) in [("step1", "step2"),
                   ("step2", "step3"),
                   ("step3", "step4"),
                   ("step4", "step5"),
                   ("step5", "step6"),
                   ("step6", "step7"),
                   ("step7", "step8")] {
        journey.try_submit_step(c, n, Utc::now(), false).expect("linear submit");
    }
    println!("tras el camino lineal: {} rama(s), {} steps",
             journey.branches().len(),
             journey.active_branch().steps.len());
    assert_eq!(journey.branches().len(), 1);

    // el member vuelve a step2 y toma el camino .1
    for (c, n) in [("step2", "step3.1"), ("step3.1", "step4.1"), ("step4.1", "step5.1")] {
        journey.try_submit_step(c, n, Utc::now(), false).expect("first divergence");
    }
    println!("tras la primera divergencia: {} ramas, activa con {} steps",
             journey.branches().len(),
             journey.active_branch().steps.len());
    assert_eq!(journey.branches().len(), 2);

    // segunda divergencia en el tip: camino .2
    for (c, n) in [("step4.1", "step5.2"), ("step5.2", "step6.2")] {
        journey.try_submit_step(c, n, Utc::now(), false).expect("second divergence");
    }
    assert_eq!(journey.branches().len(), 3);

    // reconvergencia con el camino original en step6
    journey.try_submit_step("step6.2", "step6", Utc::now(), true).expect("merge");
    println!("tras el merge: {} rama (seq {}), {} steps, posición {}",
             journey.branches().len(),
             journey.active_branch().sequence_number,
             journey.active_branch().steps.len(),
             journey.current_position());
    assert_eq!(journey.branches().len(), 1);
    assert_eq!(journey.active_branch().sequence_number, 3);
    assert_eq!(journey.active_branch().steps.len(), 9);
}

/// Demo 2: la captura por step sobrevive al branching sin duplicarse.
fn run_capture_demo() {
    let mut journey =
        Journey::create("WPS", "0000002", "transfer", "start", "hub", false, None, Utc::now(), None);
    journey.try_submit_step_with_question("hub",
                                          "quote",
                                          Utc::now(),
                                          QuestionForm::new("has_partner", "yes", "Yes"),
                                          false)
           .expect("submit hub");
    journey.try_submit_step("quote", "review", Utc::now(), false).expect("submit quote");

    journey.update_generic_data("hub", "partner_form", json!({"name": "Alex"})).expect("hub exists");
    journey.add_checkboxes_list("quote",
                                CheckboxesList::new("consents", vec![Checkbox::new("gdpr", true)]))
           .expect("quote exists");

    // divergencia: la copia profunda arrastra la captura
    journey.try_submit_step("hub", "alt_quote", Utc::now(), false).expect("divergence");
    let carried = journey.generic_data_by_form_key("partner_form").expect("carried across the split");
    println!("partner_form tras el branch: {}", carried);
    assert_eq!(carried, &json!({"name": "Alex"}));
}

/// Demo 3: proyección de stages sobre el catálogo de retirement.
fn run_stage_demo() {
    let mut journey =
        Journey::create("WPS", "0000003", "retirement", "step0", "step1", false, None, Utc::now(), None);
    for (c, n) in [("step1", "step2"), ("step2", "step3"), ("step3", "step4")] {
        journey.try_submit_step(c, n, Utc::now(), false).expect("submit");
    }

    for status in journey.stage_status(&retirement_stages()) {
        println!("stage {:<18} in_progress={} completed={:?} resume={:?}",
                 status.stage, status.in_progress, status.completed_date, status.first_page_key);
    }
    let statuses = journey.stage_status(&retirement_stages());
    assert!(!statuses[0].in_progress, "about_you debe estar completo");
    assert!(statuses[1].in_progress, "your_quotes debe seguir abierto");
}

/// Demo 4: guardas del motor como valores, nunca panics.
fn run_guard_demo() {
    let mut journey =
        Journey::create("WPS", "0000004", "generic", "start", "hub", false, None, Utc::now(), None);
    let err = journey.try_submit_step("never_visited", "anywhere", Utc::now(), false);
    println!("submission inválida rechazada: {:?}", err);
    assert_eq!(err, Err(JourneyError::InvalidCurrentPageKey));
}

fn main() {
    run_branching_demo();
    run_capture_demo();
    run_stage_demo();
    run_guard_demo();
    println!("journeyflow demos OK");
}
