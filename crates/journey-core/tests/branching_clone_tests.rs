//! Fidelidad del clon al ramificar: toda la captura por step (generic data,
//! checkboxes, question forms) debe aparecer con igual contenido en la rama
//! nueva, y las dos copias deben evolucionar de forma independiente.

use chrono::Utc;
use journey_core::{Checkbox, CheckboxesList, Journey, QuestionForm};
use serde_json::json;

fn journey_with_captured_data() -> Journey {
    let mut journey =
        Journey::create("WPS", "7654321", "retirement", "step0", "step1", false, None, Utc::now(), None);
    journey.try_submit_step_with_question("step1",
                                          "step2",
                                          Utc::now(),
                                          QuestionForm::new("has_partner", "yes", "Yes"),
                                          false)
           .expect("step1 submitted");
    journey.try_submit_step("step2", "step3", Utc::now(), false).expect("step2 submitted");
    journey.try_submit_step("step3", "step4", Utc::now(), false).expect("step3 submitted");

    journey.update_generic_data("step1", "partner_form", json!({"name": "Alex", "age": 61}))
           .expect("step1 exists");
    journey.update_generic_data("step1", "contact_form", json!({"email": "a@b.c"}))
           .expect("step1 exists");
    journey.add_checkboxes_list("step2",
                                CheckboxesList::new("consents",
                                                    vec![Checkbox::new("gdpr", true),
                                                         Checkbox::new("paperless", false)]))
           .expect("step2 exists");
    journey
}

#[test]
fn branching_deep_clones_generic_data_and_checkboxes() {
    let mut journey = journey_with_captured_data();

    // divergencia en step2: el clon cubre step0, step1 y step2
    journey.try_submit_step("step2", "alt3", Utc::now(), false).expect("divergence");
    assert_eq!(journey.branches().len(), 2);

    let cloned_step1 = journey.step_by_key("step1").expect("cloned step1");
    assert_eq!(cloned_step1.generic_data_by_form_key("partner_form"),
               Some(&json!({"name": "Alex", "age": 61})));
    assert_eq!(cloned_step1.generic_data_by_form_key("contact_form"), Some(&json!({"email": "a@b.c"})));
    assert_eq!(cloned_step1.question_form.as_ref().map(|q| q.answer_key.as_str()), Some("yes"));

    let cloned_list = journey.checkboxes_list("step2", "consents").expect("cloned checkbox group");
    assert_eq!(cloned_list.checkbox_value("gdpr"), Some(true));
    assert_eq!(cloned_list.checkbox_value("paperless"), Some(false));
}

#[test]
fn mutating_the_new_branch_leaves_the_old_branch_untouched() {
    let mut journey = journey_with_captured_data();
    journey.try_submit_step("step2", "alt3", Utc::now(), false).expect("divergence");

    // mutar la copia activa
    journey.update_generic_data("step1", "partner_form", json!({"name": "Sam"}))
           .expect("active step1");
    journey.add_checkboxes_list("step1", CheckboxesList::new("extra", vec![Checkbox::new("x", true)]))
           .expect("active step1");

    // la rama desactivada conserva el contenido original
    let old_branch = journey.branches()
                            .iter()
                            .find(|b| !b.is_active)
                            .expect("old branch retained");
    let old_step1 = old_branch.step_by_key("step1").expect("old step1");
    assert_eq!(old_step1.generic_data_by_form_key("partner_form"),
               Some(&json!({"name": "Alex", "age": 61})));
    assert!(old_step1.checkboxes_list("extra").is_none(),
            "groups added after the split must not leak into the old branch");
}

#[test]
fn overwriting_the_tip_does_not_duplicate_captured_data() {
    let mut journey = journey_with_captured_data();

    // step3 es el tip y step4 no tiene sucesor: overwrite en sitio
    journey.update_generic_data("step3", "review_form", json!({"v": 1})).expect("step3 exists");
    journey.try_submit_step("step3", "alt4", Utc::now(), false).expect("overwrite");

    assert_eq!(journey.branches().len(), 1);
    let step3 = journey.step_by_key("step3").expect("step3 kept");
    assert_eq!(step3.generic_data.len(), 1, "overwrite must keep exactly one copy of the payload");
    assert_eq!(step3.next_page_key, "alt4");
}

#[test]
fn generic_data_lookup_scans_active_branch_in_order() {
    let mut journey = journey_with_captured_data();
    // mismo form key en dos steps distintos: gana el más temprano
    journey.update_generic_data("step3", "partner_form", json!({"name": "Late"}))
           .expect("step3 exists");

    assert_eq!(journey.generic_data_by_form_key("partner_form"),
               Some(&json!({"name": "Alex", "age": 61})));
    assert_eq!(journey.generic_data_by_form_key("missing_form"), None);
}
