use super::emitter::RESERVED_IDS;
use super::sanitize::is_markup_identifier;
use crate::error::ModelIssue;
use crate::model::ProcessModel;
use ahash::AHashSet;

/// Flowchart keywords that end or restructure a block when used as a bare id.
const MARKUP_KEYWORDS: [&str; 11] = [
    "end",
    "subgraph",
    "graph",
    "flowchart",
    "style",
    "class",
    "classDef",
    "click",
    "linkStyle",
    "direction",
    "default",
];

/// Checks a model for generation. Returns every issue found, in a stable order.
pub fn validate_model(model: &ProcessModel) -> Vec<ModelIssue> {
    let mut issues = Vec::new();

    // Top-level fields
    if model.name.trim().is_empty() {
        issues.push(ModelIssue::MissingName);
    }
    if model.goal.trim().is_empty() {
        issues.push(ModelIssue::MissingGoal);
    }
    if model.trigger.trim().is_empty() {
        issues.push(ModelIssue::MissingTrigger);
    }
    if model.lanes.is_empty() {
        issues.push(ModelIssue::NoLanes);
    }
    if model.steps.is_empty() {
        issues.push(ModelIssue::NoSteps);
    }

    // Step labels and lane references
    let lane_ids: AHashSet<&str> = model.lanes.iter().map(|l| l.id.as_str()).collect();
    for (index, step) in model.steps.iter().enumerate() {
        if step.label.trim().is_empty() {
            issues.push(ModelIssue::EmptyStepLabel {
                position: index + 1,
                step_id: step.id.clone(),
            });
        }
        if !lane_ids.contains(step.lane_id.as_str()) {
            issues.push(ModelIssue::UnknownLane {
                step_id: step.id.clone(),
                lane_id: step.lane_id.clone(),
            });
        }
    }

    // Ids end up as node names, so they must be usable and distinct
    let mut seen: AHashSet<&str> = AHashSet::new();
    let all_ids = model
        .lanes
        .iter()
        .map(|l| l.id.as_str())
        .chain(model.steps.iter().map(|s| s.id.as_str()));
    for id in all_ids {
        if !is_markup_identifier(id) {
            issues.push(ModelIssue::InvalidIdentifier(id.to_string()));
        } else if RESERVED_IDS.contains(&id) || MARKUP_KEYWORDS.contains(&id) {
            issues.push(ModelIssue::ReservedIdentifier(id.to_string()));
        } else if !seen.insert(id) {
            issues.push(ModelIssue::DuplicateIdentifier(id.to_string()));
        }
    }

    issues
}
