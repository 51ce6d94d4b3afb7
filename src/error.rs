use std::fmt;
use thiserror::Error;

/// A single structural or referential problem found in a `ProcessModel`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelIssue {
    #[error("Process name is required")]
    MissingName,

    #[error("Goal is required")]
    MissingGoal,

    #[error("Trigger is required")]
    MissingTrigger,

    #[error("Add at least one lane (no lanes defined)")]
    NoLanes,

    #[error("Add at least one step (no steps defined)")]
    NoSteps,

    #[error("Step {position} ('{step_id}') needs a label: label required")]
    EmptyStepLabel { position: usize, step_id: String },

    #[error("Step '{step_id}' references lane '{lane_id}', which does not exist")]
    UnknownLane { step_id: String, lane_id: String },

    #[error("Identifier '{0}' may only contain ASCII letters, digits, '_' or '-'")]
    InvalidIdentifier(String),

    #[error("Identifier '{0}' is used more than once")]
    DuplicateIdentifier(String),

    #[error("Identifier '{0}' is reserved by the diagram markup")]
    ReservedIdentifier(String),
}

/// Every problem found while validating a model for diagram generation.
///
/// Issues are collected rather than short-circuited so callers can present
/// all of them at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ModelIssue>);

impl ValidationErrors {
    /// The human-readable message of each issue, in discovery order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn issues(&self) -> &[ModelIssue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Process model is invalid ({} issue(s))", self.0.len())?;
        for issue in &self.0 {
            write!(f, "\n  - {}", issue)?;
        }
        Ok(())
    }
}

/// Errors raised by misuse of the wizard engine or a malformed question set.
///
/// Invalid user input is never reported here; it is surfaced as a
/// `Submission::Rejected` message instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("A wizard needs at least one question")]
    EmptyQuestionSet,

    #[error("Question id '{0}' is defined more than once")]
    DuplicateQuestion(String),

    #[error("Question '{from}' leads to '{to}', which is not defined")]
    UnknownQuestion { from: String, to: String },

    #[error("The wizard has already completed; restart it to collect another process")]
    Finished,
}

/// Errors raised when a direct-editor operation is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Lane name must not be empty")]
    EmptyLaneName,

    #[error("A lane named '{0}' already exists")]
    DuplicateLane(String),

    #[error("Lane '{0}' not found")]
    LaneNotFound(String),

    #[error(
        "Lane '{lane_name}' is still used by {step_count} step(s); reassign or remove them first"
    )]
    LaneInUse { lane_name: String, step_count: usize },

    #[error("Add a lane before adding steps")]
    NoLanes,

    #[error("Step index {index} is out of range for {len} step(s)")]
    StepOutOfRange { index: usize, len: usize },
}

/// Errors that can occur when converting an authored outline into a `ProcessModel`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Lane names must not be empty")]
    EmptyLaneName,

    #[error("Lane '{0}' is listed more than once")]
    DuplicateLane(String),

    #[error("Step {position} refers to lane '{lane}', which is not listed")]
    UnknownLane { position: usize, lane: String },
}

/// Errors that can occur while reading or writing JSON documents.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Could not read '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Could not write '{path}': {message}")]
    Write { path: String, message: String },

    #[error("Failed to parse JSON document: {0}")]
    Parse(String),

    #[error("Failed to serialize JSON document: {0}")]
    Serialize(String),
}

/// An opaque failure reported by an external diagram renderer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
