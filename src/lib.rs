//! # procmap - Process Wizard and Flowchart Generator
//!
//! **procmap** turns a business process description into Mermaid flowchart
//! markup with one swimlane per responsible team. A process has a name, a goal,
//! a trigger, a set of lanes and an ordered list of steps, each assigned to a
//! lane. The generated text is handed to an external renderer (Mermaid itself,
//! a Markdown viewer, ...) which draws the diagram.
//!
//! ## Core Workflow
//!
//! There are two ways to build a [`ProcessModel`](model::ProcessModel), and both
//! end in the same generator:
//!
//! 1.  **Guided**: drive a [`Wizard`](wizard::Wizard) through its question
//!     sequence. Every answer is validated before it touches the model, and the
//!     finished model is handed back on completion.
//! 2.  **Direct**: edit lanes and steps with a [`ProcessEditor`](editor::ProcessEditor),
//!     or load a model or outline from JSON.
//! 3.  **Generate**: call [`generate`](diagram::generate) (or a configured
//!     [`Generator`](diagram::Generator)). It validates the model again, collects
//!     every problem it finds, and only then emits the markup.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use procmap::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut wizard = Wizard::standard();
//!
//!     wizard.submit_answer(Answer::Text("Customer Onboarding".into()))?;
//!     wizard.submit_answer(Answer::Text("Account activated".into()))?;
//!     wizard.submit_answer(Answer::Text("Signed contract received".into()))?;
//!     wizard.submit_answer(Answer::List(vec!["Sales".into(), "IT".into()]))?;
//!     wizard.submit_answer(Answer::Rows(vec![
//!         StepRow::new("Sign contract", "Sales"),
//!         StepRow::new("Provision account", "IT"),
//!     ]))?;
//!     wizard.submit_answer(Answer::List(vec![]))?;
//!
//!     match wizard.submit_answer(Answer::Choice(REVIEW_CONTINUE.into()))? {
//!         Submission::Completed(model) => {
//!             let markup = generate(&model, Orientation::LeftRight)?;
//!             println!("{}", markup);
//!         }
//!         other => println!("Wizard did not finish: {:?}", other),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod diagram;
pub mod editor;
pub mod error;
pub mod id;
pub mod model;
pub mod prelude;
pub mod render;
pub mod wizard;
