use super::definition::ProcessModel;
use crate::error::ConversionError;
use crate::id::IdGenerator;

/// A trait for authoring formats that can be converted into a `ProcessModel`.
///
/// Models reference lanes by opaque id, which is awkward to write by hand.
/// Implement this trait on your own format to translate it into the canonical
/// model, generating ids as needed.
///
/// # Example
///
/// ```rust,no_run
/// use procmap::prelude::*;
/// use procmap::error::ConversionError;
///
/// // A format with a single team doing every step.
/// struct Checklist { title: String, items: Vec<String> }
///
/// impl IntoProcess for Checklist {
///     fn into_process(self, ids: &mut dyn IdGenerator) -> std::result::Result<ProcessModel, ConversionError> {
///         let lane = Lane::new(ids.next_id("lane"), "Team");
///         let steps = self
///             .items
///             .into_iter()
///             .map(|label| Step::new(ids.next_id("step"), label, lane.id.clone()))
///             .collect();
///         Ok(ProcessModel {
///             name: self.title,
///             goal: "Checklist complete".to_string(),
///             trigger: "Checklist opened".to_string(),
///             lanes: vec![lane],
///             steps,
///             metrics: None,
///         })
///     }
/// }
/// ```
pub trait IntoProcess {
    /// Consumes the object and converts it into a process model.
    fn into_process(self, ids: &mut dyn IdGenerator) -> Result<ProcessModel, ConversionError>;
}

impl IntoProcess for ProcessModel {
    fn into_process(self, _ids: &mut dyn IdGenerator) -> Result<ProcessModel, ConversionError> {
        Ok(self)
    }
}
