use crate::error::ValidationErrors;
use crate::model::ProcessModel;
use tracing::{debug, warn};

mod config;
mod emitter;
pub mod sanitize;
mod validate;

pub use config::{DEFAULT_TERMINAL_STYLE, DEFAULT_TITLE_STYLE, DiagramConfig, Orientation};
pub use sanitize::sanitize;
pub use validate::validate_model;

use emitter::Emitter;

/// Turns validated process models into flowchart markup.
///
/// A `Generator` is pure: it holds only cosmetic configuration, so the same
/// model always yields byte-identical text and one generator can be reused for
/// any number of models.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: DiagramConfig,
}

pub struct GeneratorBuilder {
    config: DiagramConfig,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self {
            config: DiagramConfig::default(),
        }
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    pub fn with_config(mut self, config: DiagramConfig) -> Self {
        self.config = config;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn with_header_comment(mut self, enabled: bool) -> Self {
        self.config.header_comment = enabled;
        self
    }

    pub fn with_terminal_style(mut self, style: &str) -> Self {
        self.config.terminal_style = style.to_string();
        self
    }

    pub fn with_title_style(mut self, style: &str) -> Self {
        self.config.title_style = style.to_string();
        self
    }

    pub fn build(self) -> Generator {
        Generator {
            config: self.config,
        }
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Validates `model` and, only if it is sound, renders it to markup.
    ///
    /// # Returns
    ///
    /// * `Ok(String)`: the complete diagram source.
    /// * `Err(ValidationErrors)`: every issue found. No partial text is produced.
    pub fn generate(&self, model: &ProcessModel) -> Result<String, ValidationErrors> {
        let issues = validate_model(model);
        if !issues.is_empty() {
            warn!(issues = issues.len(), "process model failed validation");
            return Err(ValidationErrors(issues));
        }

        debug!(
            lanes = model.lanes.len(),
            steps = model.steps.len(),
            orientation = %self.config.orientation,
            "generating flowchart"
        );
        Ok(Emitter::new(model, &self.config).emit())
    }
}

/// Generates markup for `model` with the default styling.
pub fn generate(model: &ProcessModel, orientation: Orientation) -> Result<String, ValidationErrors> {
    Generator::builder()
        .orientation(orientation)
        .build()
        .generate(model)
}
