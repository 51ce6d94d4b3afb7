use crate::model::ProcessModel;

/// Formats a process model into a human-readable review summary.
pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn format_model(model: &ProcessModel) -> String {
        let mut lines = vec![
            format!("Process: {}", Self::or_unset(&model.name)),
            format!("Goal: {}", Self::or_unset(&model.goal)),
            format!("Trigger: {}", Self::or_unset(&model.trigger)),
            format!(
                "Lanes ({}): {}",
                model.lanes.len(),
                if model.lanes.is_empty() {
                    "(none)".to_string()
                } else {
                    model.lane_names().join(", ")
                }
            ),
        ];

        if model.steps.is_empty() {
            lines.push("Steps: (none)".to_string());
        } else {
            lines.push("Steps:".to_string());
            for (index, step) in model.steps.iter().enumerate() {
                // A step can outlive its lane in a hand-edited model
                let lane = model
                    .lane(&step.lane_id)
                    .map_or("?", |l| l.name.as_str());
                lines.push(format!("  {}. {} [{}]", index + 1, step.label, lane));
            }
        }

        match model.metrics.as_deref() {
            Some(metrics) if !metrics.is_empty() => {
                lines.push(format!("Metrics: {}", metrics.join(", ")));
            }
            _ => lines.push("Metrics: (none)".to_string()),
        }

        lines.join("\n")
    }

    fn or_unset(value: &str) -> &str {
        if value.trim().is_empty() {
            "(not set)"
        } else {
            value
        }
    }
}
