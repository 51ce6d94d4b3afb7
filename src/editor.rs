//! Direct manipulation of a process model.
//!
//! Every operation consumes the editor and returns the updated one, or an
//! [`EditError`] explaining why the change was refused. Clone the editor first
//! if the previous state must survive a rejection.

use crate::diagram::{Orientation, generate};
use crate::error::{EditError, ValidationErrors};
use crate::id::IdGenerator;
use crate::model::{Lane, ProcessModel, Step};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What happens to the steps of a lane that is being removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalPolicy {
    /// Refuse to remove a lane that still has steps.
    #[default]
    Reject,
    /// Remove the lane together with its steps.
    Cascade,
}

/// Owned editing state for one process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEditor {
    model: ProcessModel,
    policy: RemovalPolicy,
}

impl ProcessEditor {
    pub fn new(policy: RemovalPolicy) -> Self {
        Self {
            model: ProcessModel::default(),
            policy,
        }
    }

    /// Continue editing an existing model, e.g. one produced by the wizard.
    pub fn from_model(model: ProcessModel, policy: RemovalPolicy) -> Self {
        Self { model, policy }
    }

    pub fn model(&self) -> &ProcessModel {
        &self.model
    }

    pub fn into_model(self) -> ProcessModel {
        self.model
    }

    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.model.name = name.to_string();
        self
    }

    pub fn with_goal(mut self, goal: &str) -> Self {
        self.model.goal = goal.to_string();
        self
    }

    pub fn with_trigger(mut self, trigger: &str) -> Self {
        self.model.trigger = trigger.to_string();
        self
    }

    pub fn with_metrics(mut self, metrics: Vec<String>) -> Self {
        self.model.metrics = (!metrics.is_empty()).then_some(metrics);
        self
    }

    pub fn add_lane(mut self, name: &str, ids: &mut dyn IdGenerator) -> Result<Self, EditError> {
        let name = self.checked_lane_name(name, None)?;
        self.model.lanes.push(Lane::new(ids.next_id("lane"), name));
        Ok(self)
    }

    pub fn rename_lane(mut self, lane_id: &str, name: &str) -> Result<Self, EditError> {
        let name = self.checked_lane_name(name, Some(lane_id))?;
        let lane = self
            .model
            .lanes
            .iter_mut()
            .find(|l| l.id == lane_id)
            .ok_or_else(|| EditError::LaneNotFound(lane_id.to_string()))?;
        lane.name = name;
        Ok(self)
    }

    /// Removes a lane according to the editor's [`RemovalPolicy`].
    ///
    /// Either way no step is left referencing a missing lane.
    pub fn remove_lane(mut self, lane_id: &str) -> Result<Self, EditError> {
        let position = self
            .model
            .lanes
            .iter()
            .position(|l| l.id == lane_id)
            .ok_or_else(|| EditError::LaneNotFound(lane_id.to_string()))?;

        let step_count = self.model.steps_in_lane(lane_id).count();
        if step_count > 0 && self.policy == RemovalPolicy::Reject {
            let lane_name = self.model.lanes[position].name.clone();
            debug!(lane = %lane_name, step_count, "lane removal rejected");
            return Err(EditError::LaneInUse {
                lane_name,
                step_count,
            });
        }

        self.model.lanes.remove(position);
        self.model.steps.retain(|s| s.lane_id != lane_id);
        Ok(self)
    }

    /// Appends an unlabeled step in the first lane.
    pub fn add_step(mut self, ids: &mut dyn IdGenerator) -> Result<Self, EditError> {
        let lane_id = self
            .model
            .lanes
            .first()
            .map(|l| l.id.clone())
            .ok_or(EditError::NoLanes)?;
        self.model
            .steps
            .push(Step::new(ids.next_id("step"), "", lane_id));
        Ok(self)
    }

    pub fn set_step_label(mut self, index: usize, label: &str) -> Result<Self, EditError> {
        self.step_mut(index)?.label = label.to_string();
        Ok(self)
    }

    pub fn set_step_lane(mut self, index: usize, lane_id: &str) -> Result<Self, EditError> {
        if self.model.lane(lane_id).is_none() {
            return Err(EditError::LaneNotFound(lane_id.to_string()));
        }
        self.step_mut(index)?.lane_id = lane_id.to_string();
        Ok(self)
    }

    pub fn remove_step(mut self, index: usize) -> Result<Self, EditError> {
        self.check_index(index)?;
        self.model.steps.remove(index);
        Ok(self)
    }

    /// Moves the step at `from` so that it ends up at position `to` (drag and drop).
    pub fn move_step(mut self, from: usize, to: usize) -> Result<Self, EditError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from != to {
            let step = self.model.steps.remove(from);
            self.model.steps.insert(to, step);
        }
        Ok(self)
    }

    pub fn generate(&self, orientation: Orientation) -> Result<String, ValidationErrors> {
        generate(&self.model, orientation)
    }

    fn checked_lane_name(&self, name: &str, renaming: Option<&str>) -> Result<String, EditError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditError::EmptyLaneName);
        }
        let taken = self
            .model
            .lanes
            .iter()
            .any(|l| l.name == name && Some(l.id.as_str()) != renaming);
        if taken {
            return Err(EditError::DuplicateLane(name.to_string()));
        }
        Ok(name.to_string())
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.model.steps.len() {
            Ok(())
        } else {
            Err(EditError::StepOutOfRange {
                index,
                len: self.model.steps.len(),
            })
        }
    }

    fn step_mut(&mut self, index: usize) -> Result<&mut Step, EditError> {
        let len = self.model.steps.len();
        self.model
            .steps
            .get_mut(index)
            .ok_or(EditError::StepOutOfRange { index, len })
    }
}
