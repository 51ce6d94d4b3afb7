//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the procmap crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use procmap::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let model = ProcessModel::from_file("path/to/process.json")?;
//! let markup = generate(&model, Orientation::TopDown)?;
//! println!("{}", markup);
//! # Ok(())
//! # }
//! ```

// Generation
pub use crate::diagram::{DiagramConfig, Generator, Orientation, generate, sanitize};

// Model types
pub use crate::model::{IntoProcess, Lane, ProcessModel, ProcessOutline, Step, StepRow};

// Guided and direct editing
pub use crate::editor::{ProcessEditor, RemovalPolicy};
pub use crate::wizard::{
    Answer, Destination, ListDraft, Question, QuestionKind, QuestionSet, REVIEW_CONTINUE,
    REVIEW_RESTART, Submission, SummaryFormatter, TableDraft, Wizard, WizardContext,
};

// Identifiers and rendering
pub use crate::id::{IdGenerator, RandomIds, SequentialIds};
pub use crate::render::{DiagramRenderer, MarkdownRenderer, render_diagram};

// Error types
pub use crate::error::{
    ConversionError, DocumentError, EditError, ModelIssue, RenderError, ValidationErrors,
    WizardError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
