use super::question::Answer;
use crate::model::ProcessModel;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Everything the wizard has collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardContext {
    /// The process being built.
    pub model: ProcessModel,
    /// Last submitted raw answer per question id.
    pub answers: AHashMap<String, Answer>,
}

impl WizardContext {
    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }
}
