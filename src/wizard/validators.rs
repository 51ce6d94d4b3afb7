//! Reusable answer validators. Each returns `Some(message)` when the answer is rejected.

use super::context::WizardContext;
use super::question::Answer;
use ahash::AHashSet;
use itertools::Itertools;

/// Non-empty after trimming surrounding whitespace.
pub fn required_text(answer: &Answer, _ctx: &WizardContext) -> Option<String> {
    match answer.as_text() {
        Some(text) if !text.trim().is_empty() => None,
        _ => Some("Required".to_string()),
    }
}

/// At least one non-blank item.
pub fn at_least_one(
    message: &'static str,
) -> impl Fn(&Answer, &WizardContext) -> Option<String> + Send + Sync + 'static {
    move |answer, _ctx| {
        let has_item = answer
            .as_list()
            .is_some_and(|items| items.iter().any(|i| !i.trim().is_empty()));
        (!has_item).then(|| message.to_string())
    }
}

/// Every row needs an action, and its lane must name a lane already in the context.
///
/// When no lanes have been collected yet the lane check is skipped: the
/// default step applier then files every row under a fallback lane.
pub fn rows_reference_known_lanes(answer: &Answer, ctx: &WizardContext) -> Option<String> {
    let rows = answer.as_rows().unwrap_or_default();
    if rows.is_empty() {
        return Some("Add at least one step".to_string());
    }

    let lane_names: AHashSet<&str> = ctx.model.lanes.iter().map(|l| l.name.as_str()).collect();
    for (index, row) in rows.iter().enumerate() {
        if row.action.trim().is_empty() {
            return Some(format!("Step {} needs an Action label", index + 1));
        }
        if !lane_names.is_empty() && !lane_names.contains(row.lane.trim()) {
            return Some(format!(
                "Step {} must be mapped to an existing lane: '{}' is not one of {}",
                index + 1,
                row.lane.trim(),
                ctx.model.lanes.iter().map(|l| &l.name).join(", ")
            ));
        }
    }
    None
}
