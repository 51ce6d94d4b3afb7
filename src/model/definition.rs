use serde::{Deserialize, Serialize};

/// A named group responsible for a set of steps (a swimlane).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub id: String,
    pub name: String,
}

/// One labeled unit of work. Its position in `ProcessModel::steps` is its place in the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub label: String,
    /// Non-owning reference to `Lane::id`.
    pub lane_id: String,
}

/// The complete, serializable snapshot of a process, ready for diagram generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub trigger: String,
    #[serde(default)]
    pub lanes: Vec<Lane>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
}

impl Lane {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Step {
    pub fn new(id: impl Into<String>, label: impl Into<String>, lane_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            lane_id: lane_id.into(),
        }
    }
}

impl ProcessModel {
    pub fn lane(&self, lane_id: &str) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.id == lane_id)
    }

    pub fn lane_by_name(&self, name: &str) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.name == name)
    }

    /// Lane names in lane order.
    pub fn lane_names(&self) -> Vec<&str> {
        self.lanes.iter().map(|l| l.name.as_str()).collect()
    }

    /// Steps assigned to `lane_id`, in global step order.
    pub fn steps_in_lane<'a>(&'a self, lane_id: &'a str) -> impl Iterator<Item = &'a Step> + 'a {
        self.steps.iter().filter(move |s| s.lane_id == lane_id)
    }

    /// Drops every step whose lane no longer exists.
    ///
    /// Returns the number of steps removed.
    pub fn prune_orphan_steps(&mut self) -> usize {
        let before = self.steps.len();
        let lanes = &self.lanes;
        self.steps.retain(|s| lanes.iter().any(|l| l.id == s.lane_id));
        before - self.steps.len()
    }
}
