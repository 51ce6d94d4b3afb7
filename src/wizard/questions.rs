use super::context::WizardContext;
use super::question::{Answer, Destination, Question, distinct_trimmed};
use super::validators::at_least_one;
use crate::id::IdGenerator;
use crate::model::{Lane, Step};
use ahash::AHashMap;
use tracing::debug;

pub const ENTRY_QUESTION: &str = "name";
pub const FALLBACK_LANE: &str = "General";
pub const REVIEW_CONTINUE: &str = "Yes, continue";
pub const REVIEW_RESTART: &str = "No, restart";

/// The standard question sequence:
/// `name -> goal -> trigger -> lanes -> happy -> metrics -> review`.
///
/// `review` either completes the wizard or routes back to `name`, which restarts it.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::input(ENTRY_QUESTION, "Process name")
            .help("e.g., Customer Onboarding")
            .on_answer(|answer, ctx, _| ctx.model.name = trimmed_text(answer))
            .next("goal"),
        Question::input("goal", "What outcome should the process guarantee?")
            .help("e.g., Account activated")
            .on_answer(|answer, ctx, _| ctx.model.goal = trimmed_text(answer))
            .next("trigger"),
        Question::input("trigger", "What starts the process?")
            .help("e.g., Signed contract received")
            .on_answer(|answer, ctx, _| ctx.model.trigger = trimmed_text(answer))
            .next("lanes"),
        Question::multi("lanes", "Who is involved? Each team or role becomes a lane")
            .help("Add one to six lanes")
            .validate(at_least_one("Add at least one lane"))
            .on_answer(apply_lanes)
            .next("happy"),
        Question::table(
            "happy",
            "Happy path: the actions that reach the goal, verb first",
            &["Action", "Lane"],
        )
        .help("Add actions and map each one to a lane")
        .on_answer(apply_steps)
        .next("metrics"),
        Question::multi("metrics", "What will you measure? (optional)")
            .help("e.g., Lead time, First-pass yield")
            .optional()
            .on_answer(apply_metrics)
            .next("review"),
        Question::select(
            "review",
            "Ready to generate the diagram?",
            &[REVIEW_CONTINUE, REVIEW_RESTART],
        )
        .help("You can still edit the model afterwards")
        .next_with(|answer, _| {
            if answer.as_choice().is_some_and(|c| c.starts_with("Yes")) {
                Destination::Complete
            } else {
                Destination::question(ENTRY_QUESTION)
            }
        }),
    ]
}

fn trimmed_text(answer: &Answer) -> String {
    answer.as_text().unwrap_or_default().trim().to_string()
}

/// Replaces the lane set. Lanes whose name survives keep their id, and steps
/// left pointing at a dropped lane are removed.
fn apply_lanes(answer: &Answer, ctx: &mut WizardContext, ids: &mut dyn IdGenerator) {
    let names = distinct_trimmed(answer.as_list().unwrap_or_default());
    let previous = std::mem::take(&mut ctx.model.lanes);

    ctx.model.lanes = names
        .into_iter()
        .map(|name| match previous.iter().find(|l| l.name == name) {
            Some(existing) => existing.clone(),
            None => Lane::new(ids.next_id("lane"), name),
        })
        .collect();

    let pruned = ctx.model.prune_orphan_steps();
    if pruned > 0 {
        debug!(pruned, "dropped steps whose lane was removed");
    }
}

/// Rebuilds the step list from table rows, synthesizing a fallback lane when none exist.
fn apply_steps(answer: &Answer, ctx: &mut WizardContext, ids: &mut dyn IdGenerator) {
    if ctx.model.lanes.is_empty() {
        debug!(lane = FALLBACK_LANE, "no lanes collected, adding fallback lane");
        ctx.model
            .lanes
            .push(Lane::new(ids.next_id("lane"), FALLBACK_LANE));
    }

    let by_name: AHashMap<&str, &str> = ctx
        .model
        .lanes
        .iter()
        .map(|l| (l.name.as_str(), l.id.as_str()))
        .collect();
    let fallback_id = ctx.model.lanes[0].id.as_str();

    let steps: Vec<Step> = answer
        .as_rows()
        .unwrap_or_default()
        .iter()
        .map(|row| {
            let lane_id = by_name
                .get(row.lane.trim())
                .copied()
                .unwrap_or(fallback_id);
            Step::new(ids.next_id("step"), row.action.trim(), lane_id)
        })
        .collect();

    ctx.model.steps = steps;
}

fn apply_metrics(answer: &Answer, ctx: &mut WizardContext, _ids: &mut dyn IdGenerator) {
    let metrics = distinct_trimmed(answer.as_list().unwrap_or_default());
    ctx.model.metrics = (!metrics.is_empty()).then_some(metrics);
}
