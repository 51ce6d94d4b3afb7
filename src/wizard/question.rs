use super::context::WizardContext;
use super::validators;
use crate::id::IdGenerator;
use crate::model::StepRow;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw answer as submitted by the user, one variant per question kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Answer {
    Text(String),
    List(Vec<String>),
    Rows(Vec<StepRow>),
    Choice(String),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Answer::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_rows(&self) -> Option<&[StepRow]> {
        match self {
            Answer::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Answer::Choice(c) => Some(c),
            _ => None,
        }
    }
}

/// The shape of input a question expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// A single free-text value.
    Input,
    /// An ordered set of free-text values.
    Multi,
    /// Ordered records with named columns.
    Table { columns: Vec<String> },
    /// One choice from a fixed list.
    Select { options: Vec<String> },
}

impl QuestionKind {
    fn accepts(&self, answer: &Answer) -> bool {
        matches!(
            (self, answer),
            (QuestionKind::Input, Answer::Text(_))
                | (QuestionKind::Multi, Answer::List(_))
                | (QuestionKind::Table { .. }, Answer::Rows(_))
                | (QuestionKind::Select { .. }, Answer::Choice(_))
        )
    }

    fn expected(&self) -> &'static str {
        match self {
            QuestionKind::Input => "a text answer",
            QuestionKind::Multi => "a list of values",
            QuestionKind::Table { .. } => "a table of rows",
            QuestionKind::Select { .. } => "one of the listed options",
        }
    }
}

/// Where the wizard goes after a question has been answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Question(String),
    /// Hand the collected model to the caller.
    Complete,
}

impl Destination {
    pub fn question(id: &str) -> Self {
        Destination::Question(id.to_string())
    }
}

pub type Validator = Box<dyn Fn(&Answer, &WizardContext) -> Option<String> + Send + Sync>;
pub type Applier = Box<dyn Fn(&Answer, &mut WizardContext, &mut dyn IdGenerator) + Send + Sync>;
pub type Resolver = Box<dyn Fn(&Answer, &WizardContext) -> Destination + Send + Sync>;

pub enum Next {
    Fixed(Destination),
    Resolve(Resolver),
}

/// One step of the wizard: a typed prompt with its validation, effect and transition.
///
/// Questions are assembled with builder-style methods:
///
/// ```rust
/// use procmap::wizard::Question;
///
/// let q = Question::input("name", "Process name")
///     .help("e.g., Customer Onboarding")
///     .on_answer(|answer, ctx, _ids| {
///         ctx.model.name = answer.as_text().unwrap_or_default().trim().to_string();
///     })
///     .next("goal");
/// assert_eq!(q.id(), "name");
/// ```
pub struct Question {
    id: String,
    kind: QuestionKind,
    prompt: String,
    help: Option<String>,
    validator: Option<Validator>,
    applier: Option<Applier>,
    next: Next,
}

impl Question {
    fn with_kind(id: &str, prompt: &str, kind: QuestionKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            prompt: prompt.to_string(),
            help: None,
            validator: None,
            applier: None,
            next: Next::Fixed(Destination::Complete),
        }
    }

    /// A free-text question. Requires a non-blank answer unless made `optional`.
    pub fn input(id: &str, prompt: &str) -> Self {
        Self::with_kind(id, prompt, QuestionKind::Input).validate(validators::required_text)
    }

    /// A list question. Requires at least one non-blank item unless made `optional`.
    pub fn multi(id: &str, prompt: &str) -> Self {
        Self::with_kind(id, prompt, QuestionKind::Multi)
            .validate(validators::at_least_one("Add at least one item"))
    }

    /// A table of `Action | Lane` rows, checked against the lanes collected so far.
    pub fn table(id: &str, prompt: &str, columns: &[&str]) -> Self {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        Self::with_kind(id, prompt, QuestionKind::Table { columns })
            .validate(validators::rows_reference_known_lanes)
    }

    /// A single choice. Only the listed options are accepted.
    pub fn select(id: &str, prompt: &str, options: &[&str]) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        Self::with_kind(id, prompt, QuestionKind::Select { options })
    }

    pub fn help(mut self, text: &str) -> Self {
        self.help = Some(text.to_string());
        self
    }

    /// Drops the validator, so any well-shaped answer is accepted.
    pub fn optional(mut self) -> Self {
        self.validator = None;
        self
    }

    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Answer, &WizardContext) -> Option<String> + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn on_answer<F>(mut self, applier: F) -> Self
    where
        F: Fn(&Answer, &mut WizardContext, &mut dyn IdGenerator) + Send + Sync + 'static,
    {
        self.applier = Some(Box::new(applier));
        self
    }

    pub fn next(mut self, id: &str) -> Self {
        self.next = Next::Fixed(Destination::question(id));
        self
    }

    pub fn complete(mut self) -> Self {
        self.next = Next::Fixed(Destination::Complete);
        self
    }

    pub fn next_with<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Answer, &WizardContext) -> Destination + Send + Sync + 'static,
    {
        self.next = Next::Resolve(Box::new(resolver));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.validator.is_some()
    }

    /// The statically known destination, if the transition does not depend on the answer.
    pub fn fixed_destination(&self) -> Option<&Destination> {
        match &self.next {
            Next::Fixed(dest) => Some(dest),
            Next::Resolve(_) => None,
        }
    }

    /// Checks shape, option membership, then the question's own validator.
    pub(crate) fn check(&self, answer: &Answer, ctx: &WizardContext) -> Option<String> {
        if !self.kind.accepts(answer) {
            return Some(format!("Expected {}", self.kind.expected()));
        }
        if let (QuestionKind::Select { options }, Answer::Choice(choice)) = (&self.kind, answer) {
            if !options.iter().any(|o| o == choice) {
                return Some(format!("Choose one of: {}", options.iter().join(", ")));
            }
        }
        self.validator.as_ref().and_then(|v| v(answer, ctx))
    }

    pub(crate) fn apply(&self, answer: &Answer, ctx: &mut WizardContext, ids: &mut dyn IdGenerator) {
        if let Some(applier) = &self.applier {
            applier(answer, ctx, ids);
        }
    }

    pub(crate) fn resolve(&self, answer: &Answer, ctx: &WizardContext) -> Destination {
        match &self.next {
            Next::Fixed(dest) => dest.clone(),
            Next::Resolve(resolver) => resolver(answer, ctx),
        }
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("prompt", &self.prompt)
            .field("required", &self.is_required())
            .field("next", &self.fixed_destination())
            .finish()
    }
}

/// Trims `values`, drops blanks and keeps the first occurrence of each.
pub(crate) fn distinct_trimmed(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unique()
        .map(str::to_string)
        .collect()
}
