use super::conversion::IntoProcess;
use super::definition::{Lane, ProcessModel, Step};
use crate::error::ConversionError;
use crate::id::IdGenerator;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One row of the `Action | Lane` table: a step label and the *name* of its lane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRow {
    #[serde(alias = "Action")]
    pub action: String,
    #[serde(alias = "Lane")]
    pub lane: String,
}

impl StepRow {
    pub fn new(action: impl Into<String>, lane: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            lane: lane.into(),
        }
    }
}

/// A hand-authored process description that refers to lanes by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutline {
    pub name: String,
    pub goal: String,
    pub trigger: String,
    #[serde(default)]
    pub lanes: Vec<String>,
    #[serde(default)]
    pub steps: Vec<StepRow>,
    #[serde(default)]
    pub metrics: Vec<String>,
}

impl IntoProcess for ProcessOutline {
    fn into_process(self, ids: &mut dyn IdGenerator) -> Result<ProcessModel, ConversionError> {
        let mut lanes = Vec::with_capacity(self.lanes.len());
        let mut by_name: AHashMap<String, String> = AHashMap::new();

        for raw in self.lanes {
            let name = raw.trim().to_string();
            if name.is_empty() {
                return Err(ConversionError::EmptyLaneName);
            }
            if by_name.contains_key(&name) {
                return Err(ConversionError::DuplicateLane(name));
            }
            let lane = Lane::new(ids.next_id("lane"), name.clone());
            by_name.insert(name, lane.id.clone());
            lanes.push(lane);
        }

        let steps = self
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let lane_name = row.lane.trim();
                let lane_id = by_name.get(lane_name).ok_or_else(|| ConversionError::UnknownLane {
                    position: index + 1,
                    lane: lane_name.to_string(),
                })?;
                Ok(Step::new(ids.next_id("step"), row.action.trim(), lane_id.clone()))
            })
            .collect::<Result<Vec<_>, ConversionError>>()?;

        let metrics: Vec<String> = self
            .metrics
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();

        Ok(ProcessModel {
            name: self.name.trim().to_string(),
            goal: self.goal.trim().to_string(),
            trigger: self.trigger.trim().to_string(),
            lanes,
            steps,
            metrics: (!metrics.is_empty()).then_some(metrics),
        })
    }
}
