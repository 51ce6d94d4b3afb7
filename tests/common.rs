//! Common test utilities for building process models and driving the wizard.
use procmap::prelude::*;

/// The onboarding process used throughout the tests.
///
/// Lanes: Sales (`lane_1`), IT (`lane_2`). Steps: Sign contract (Sales),
/// Provision account (IT), Send welcome email (Sales).
#[allow(dead_code)]
pub fn create_onboarding_model() -> ProcessModel {
    ProcessModel {
        name: "Customer Onboarding".to_string(),
        goal: "Account activated".to_string(),
        trigger: "Signed contract received".to_string(),
        lanes: vec![Lane::new("lane_1", "Sales"), Lane::new("lane_2", "IT")],
        steps: vec![
            Step::new("step_1", "Sign contract", "lane_1"),
            Step::new("step_2", "Provision account", "lane_2"),
            Step::new("step_3", "Send welcome email", "lane_1"),
        ],
        metrics: None,
    }
}

/// The same process as an outline, referencing lanes by name.
#[allow(dead_code)]
pub fn create_onboarding_outline() -> ProcessOutline {
    ProcessOutline {
        name: "Customer Onboarding".to_string(),
        goal: "Account activated".to_string(),
        trigger: "Signed contract received".to_string(),
        lanes: vec!["Sales".to_string(), "IT".to_string()],
        steps: vec![
            StepRow::new("Sign contract", "Sales"),
            StepRow::new("Provision account", "IT"),
            StepRow::new("Send welcome email", "Sales"),
        ],
        metrics: vec!["Time to activation".to_string()],
    }
}

#[allow(dead_code)]
pub const ONBOARDING_OUTLINE_JSON: &str = r#"{
    "name": "Customer Onboarding",
    "goal": "Account activated",
    "trigger": "Signed contract received",
    "lanes": ["Sales", "IT"],
    "steps": [
        { "Action": "Sign contract", "Lane": "Sales" },
        { "action": "Provision account", "lane": "IT" }
    ]
}"#;

/// A standard wizard with deterministic ids.
#[allow(dead_code)]
pub fn create_wizard() -> Wizard {
    Wizard::standard().with_id_generator(SequentialIds::new())
}

#[allow(dead_code)]
pub fn text(value: &str) -> Answer {
    Answer::Text(value.to_string())
}

#[allow(dead_code)]
pub fn list(values: &[&str]) -> Answer {
    Answer::List(values.iter().map(|v| v.to_string()).collect())
}

#[allow(dead_code)]
pub fn rows(values: &[(&str, &str)]) -> Answer {
    Answer::Rows(
        values
            .iter()
            .map(|(action, lane)| StepRow::new(*action, *lane))
            .collect(),
    )
}

/// Submits `answer` and panics unless the wizard advanced.
#[allow(dead_code)]
pub fn advance(wizard: &mut Wizard, answer: Answer) {
    match wizard.submit_answer(answer) {
        Ok(Submission::Advanced { .. }) => {}
        other => panic!(
            "expected to advance from '{}', got {:?}",
            wizard.current_question_id(),
            other
        ),
    }
}

/// Answers name, goal, trigger and lanes, leaving the wizard at the step table.
#[allow(dead_code)]
pub fn answer_until_steps(wizard: &mut Wizard, lanes: &[&str]) {
    advance(wizard, text("Customer Onboarding"));
    advance(wizard, text("Account activated"));
    advance(wizard, text("Signed contract received"));
    advance(wizard, list(lanes));
}

/// Answers every question up to the review, leaving the wizard at `review`.
#[allow(dead_code)]
pub fn answer_until_review(wizard: &mut Wizard) {
    answer_until_steps(wizard, &["Sales", "IT"]);
    advance(
        wizard,
        rows(&[
            ("Sign contract", "Sales"),
            ("Provision account", "IT"),
            ("Send welcome email", "Sales"),
        ]),
    );
    advance(wizard, list(&["Time to activation"]));
}
