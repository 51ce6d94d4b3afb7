use super::config::DiagramConfig;
use super::sanitize::sanitize;
use crate::model::{ProcessModel, Step};
use ahash::AHashMap;
use itertools::Itertools;

pub(crate) const TRIGGER_NODE: &str = "proc_trigger";
pub(crate) const GOAL_NODE: &str = "proc_goal";
pub(crate) const TITLE_NODE: &str = "proc_title";
pub(crate) const RESERVED_IDS: [&str; 3] = [TRIGGER_NODE, GOAL_NODE, TITLE_NODE];

const TERMINAL_CLASS: &str = "terminal";
const TITLE_CLASS: &str = "title";

/// Writes the flowchart markup for a model line by line.
///
/// The emitter trusts its input: it does not validate, and steps whose lane is
/// unknown are simply left outside every lane block.
pub(super) struct Emitter<'a> {
    model: &'a ProcessModel,
    config: &'a DiagramConfig,
    lines: Vec<String>,
}

impl<'a> Emitter<'a> {
    pub(super) fn new(model: &'a ProcessModel, config: &'a DiagramConfig) -> Self {
        Self {
            model,
            config,
            lines: Vec::new(),
        }
    }

    pub(super) fn emit(mut self) -> String {
        self.header();
        self.terminals();
        self.lanes();
        self.edges();
        self.title();
        self.styles();
        self.lines.join("\n")
    }

    fn header(&mut self) {
        self.lines
            .push(format!("flowchart {}", self.config.orientation.keyword()));

        if self.config.header_comment {
            self.lines.push(format!(
                "%% {} | Goal: {} | Trigger: {}",
                sanitize(&self.model.name),
                sanitize(&self.model.goal),
                sanitize(&self.model.trigger)
            ));
            if let Some(metrics) = self.model.metrics.as_ref().filter(|m| !m.is_empty()) {
                self.lines.push(format!(
                    "%% Metrics: {}",
                    metrics.iter().map(|m| sanitize(m)).join(", ")
                ));
            }
        }
    }

    fn terminals(&mut self) {
        self.lines.push(format!(
            "{}([\"{}\"])",
            TRIGGER_NODE,
            sanitize(&self.model.trigger)
        ));
        self.lines.push(format!(
            "{}([\"{}\"])",
            GOAL_NODE,
            sanitize(&self.model.goal)
        ));
    }

    /// One block per lane, in lane order. Within a block, steps keep their global order.
    fn lanes(&mut self) {
        let mut by_lane: AHashMap<&str, Vec<&Step>> = self
            .model
            .lanes
            .iter()
            .map(|lane| (lane.id.as_str(), Vec::new()))
            .collect();
        for step in &self.model.steps {
            if let Some(group) = by_lane.get_mut(step.lane_id.as_str()) {
                group.push(step);
            }
        }

        for lane in &self.model.lanes {
            self.lines
                .push(format!("subgraph {}[\"{}\"]", lane.id, sanitize(&lane.name)));
            for step in by_lane.remove(lane.id.as_str()).unwrap_or_default() {
                self.lines.push(format!(
                    "{}{}[\"{}\"]",
                    self.config.indent,
                    step.id,
                    sanitize(&step.label)
                ));
            }
            self.lines.push("end".to_string());
        }
    }

    /// trigger -> s0 -> ... -> sN-1 -> goal, in global step order.
    fn edges(&mut self) {
        if self.model.steps.is_empty() {
            return;
        }

        let chain = std::iter::once(TRIGGER_NODE)
            .chain(self.model.steps.iter().map(|s| s.id.as_str()))
            .chain(std::iter::once(GOAL_NODE));
        for (from, to) in chain.tuple_windows() {
            self.lines.push(format!("{} --> {}", from, to));
        }
    }

    fn title(&mut self) {
        self.lines.push(format!(
            "{}[\"{}\"]",
            TITLE_NODE,
            sanitize(&self.model.name)
        ));
    }

    fn styles(&mut self) {
        self.lines.push(format!(
            "classDef {} {}",
            TERMINAL_CLASS, self.config.terminal_style
        ));
        self.lines
            .push(format!("classDef {} {}", TITLE_CLASS, self.config.title_style));
        self.lines.push(format!(
            "class {},{} {}",
            TRIGGER_NODE, GOAL_NODE, TERMINAL_CLASS
        ));
        self.lines.push(format!("class {} {}", TITLE_NODE, TITLE_CLASS));
    }
}
