use chrono::Utc;
use journey_core::{Journey, StageDefinition};

fn new_journey() -> Journey {
    Journey::create("WPS", "5550001", "retirement", "start", "step1", false, None, Utc::now(), None)
}

fn submit(journey: &mut Journey, current: &str, next: &str) {
    journey.try_submit_step(current, next, Utc::now(), false)
           .unwrap_or_else(|e| panic!("submit {} -> {} failed: {}", current, next, e));
}

#[test]
fn stage_whose_start_was_never_reached_is_absent() {
    let journey = new_journey();
    let defs = [StageDefinition::new("quotes", &["step2"], &["step2.1"])];

    assert!(journey.stage_status(&defs).is_empty(),
            "a stage with no start step in history is not reported");
}

#[test]
fn stage_completes_when_a_submission_reaches_the_end_page() {
    let mut journey = new_journey();
    submit(&mut journey, "step1", "step2");
    submit(&mut journey, "step2", "step2.1");

    let defs = [StageDefinition::new("quotes", &["step2"], &["step2.1"])];
    let statuses = journey.stage_status(&defs);

    assert_eq!(statuses.len(), 1);
    let status = &statuses[0];
    assert_eq!(status.stage, "quotes");
    assert!(!status.in_progress);
    let boundary = journey.step_by_key("step2").expect("step2 recorded");
    assert_eq!(status.completed_date, boundary.submit_date,
               "completion is dated by the step that reached the end page");
    assert_eq!(status.first_page_key, None);
}

#[test]
fn stage_in_progress_reports_the_resume_page() {
    let mut journey = new_journey();
    submit(&mut journey, "step1", "step2");
    submit(&mut journey, "step2", "step3");

    let defs = [StageDefinition::new("quotes", &["step2"], &["step9"])];
    let statuses = journey.stage_status(&defs);

    assert_eq!(statuses.len(), 1);
    assert!(statuses[0].in_progress);
    assert_eq!(statuses[0].completed_date, None);
    assert_eq!(statuses[0].first_page_key, Some("step2".to_string()),
               "the start step carries a committed submission, so the UI can resume there");
}

#[test]
fn multiple_definitions_project_independently() {
    let mut journey = new_journey();
    submit(&mut journey, "step1", "step2");
    submit(&mut journey, "step2", "step3");
    submit(&mut journey, "step3", "step4");

    let defs = [StageDefinition::new("about_you", &["step1"], &["step2"]),
                StageDefinition::new("quotes", &["step3"], &["step9"]),
                StageDefinition::new("review", &["step8"], &["step9"])];
    let statuses = journey.stage_status(&defs);

    assert_eq!(statuses.len(), 2, "the never-started stage is absent");
    assert!(!statuses[0].in_progress, "about_you completed");
    assert!(statuses[1].in_progress, "quotes still open");
}

#[test]
fn stage_projection_follows_the_active_branch() {
    let mut journey = new_journey();
    submit(&mut journey, "step1", "step2");
    submit(&mut journey, "step2", "step2.1");
    // divergencia en step1: la rama activa ya no contiene step2
    submit(&mut journey, "step1", "alt2");

    let defs = [StageDefinition::new("quotes", &["step2"], &["step2.1"])];
    assert!(journey.stage_status(&defs).is_empty(),
            "the projection reads the active branch, not the abandoned one");
}

#[test]
fn steps_loaded_without_a_submit_date_do_not_qualify() {
    // Historia cargada de storage con un step que el member nunca confirmó:
    // ese step no completa el stage y tampoco ofrece página de reanudación.
    let mut journey = new_journey();
    submit(&mut journey, "step1", "step2");
    submit(&mut journey, "step2", "step2.1");

    let mut raw = serde_json::to_value(&journey).expect("journey serializes");
    raw["branches"][0]["steps"][2]["submit_date"] = serde_json::Value::Null;
    let restored: Journey = serde_json::from_value(raw).expect("journey deserializes");

    let defs = [StageDefinition::new("quotes", &["step2"], &["step2.1"])];
    let statuses = restored.stage_status(&defs);

    assert_eq!(statuses.len(), 1);
    assert!(statuses[0].in_progress, "an unconfirmed end step must not complete the stage");
    assert_eq!(statuses[0].completed_date, None);
    assert_eq!(statuses[0].first_page_key, None,
               "no resume page when the start step was never confirmed");
}

#[test]
fn start_set_accepts_any_candidate_key() {
    let mut journey = new_journey();
    submit(&mut journey, "step1", "step2b");
    submit(&mut journey, "step2b", "step3");

    let defs = [StageDefinition::new("quotes", &["step2a", "step2b"], &["step9"])];
    let statuses = journey.stage_status(&defs);
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].first_page_key, Some("step2b".to_string()));
}
