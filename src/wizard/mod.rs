use crate::error::WizardError;
use crate::id::{IdGenerator, RandomIds};
use crate::model::ProcessModel;
use ahash::AHashMap;
use tracing::{debug, info};

mod context;
mod draft;
mod question;
mod questions;
mod summary;
pub mod validators;

pub use context::WizardContext;
pub use draft::{ListDraft, TableDraft};
pub use question::{
    Answer, Applier, Destination, Next, Question, QuestionKind, Resolver, Validator,
};
pub use questions::{
    ENTRY_QUESTION, FALLBACK_LANE, REVIEW_CONTINUE, REVIEW_RESTART, default_questions,
};
pub use summary::SummaryFormatter;

/// An ordered, validated table of questions. The first question is the entry point.
#[derive(Debug)]
pub struct QuestionSet {
    questions: Vec<Question>,
    index: AHashMap<String, usize>,
}

impl QuestionSet {
    /// Checks that the set is non-empty, ids are unique, and every fixed
    /// destination names a question in the set.
    pub fn new(questions: Vec<Question>) -> Result<Self, WizardError> {
        if questions.is_empty() {
            return Err(WizardError::EmptyQuestionSet);
        }

        let mut index = AHashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if index.insert(question.id().to_string(), position).is_some() {
                return Err(WizardError::DuplicateQuestion(question.id().to_string()));
            }
        }

        for question in &questions {
            if let Some(Destination::Question(to)) = question.fixed_destination() {
                if !index.contains_key(to) {
                    return Err(WizardError::UnknownQuestion {
                        from: question.id().to_string(),
                        to: to.clone(),
                    });
                }
            }
        }

        Ok(Self { questions, index })
    }

    /// The built-in process questionnaire.
    pub fn standard() -> Self {
        let questions = default_questions();
        let index = questions
            .iter()
            .enumerate()
            .map(|(position, q)| (q.id().to_string(), position))
            .collect();
        Self { questions, index }
    }

    pub fn entry(&self) -> &Question {
        &self.questions[0]
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.position(id).map(|p| &self.questions[p])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// The outcome of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The answer was accepted and the wizard moved to question `to`.
    Advanced { to: String },
    /// The answer failed validation. Nothing changed; the message is also kept as `last_error`.
    Rejected(String),
    /// The answer routed back to the entry question; all collected data was discarded.
    Restarted,
    /// The wizard finished and handed over the collected model.
    Completed(ProcessModel),
}

type CompletionCallback = Box<dyn FnMut(&ProcessModel)>;

/// Drives a [`QuestionSet`], building a [`ProcessModel`] one validated answer at a time.
///
/// Answers are applied to a copy of the context, which replaces the live one only
/// once the transition has been resolved. Going back changes the displayed
/// question but never rolls back data that earlier answers applied.
pub struct Wizard {
    questions: QuestionSet,
    history: Vec<usize>,
    last_error: Option<String>,
    context: WizardContext,
    ids: Box<dyn IdGenerator>,
    finished: bool,
    on_complete: Option<CompletionCallback>,
}

const ENTRY: usize = 0;

impl Wizard {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            history: vec![ENTRY],
            last_error: None,
            context: WizardContext::default(),
            ids: Box::new(RandomIds::new()),
            finished: false,
            on_complete: None,
        }
    }

    /// A wizard over the standard questionnaire.
    pub fn standard() -> Self {
        Self::new(QuestionSet::standard())
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Registers a callback that receives the finished model each time the wizard completes.
    pub fn on_complete(mut self, callback: impl FnMut(&ProcessModel) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Begins a fresh run at the entry question.
    pub fn start(&mut self) {
        self.restart();
    }

    /// Resets to the entry question and discards everything collected.
    pub fn restart(&mut self) {
        self.history = vec![ENTRY];
        self.last_error = None;
        self.context = WizardContext::default();
        self.finished = false;
    }

    /// Validates and applies `answer` to the current question.
    ///
    /// # Returns
    ///
    /// * `Ok(Submission)`: what happened, including rejected input.
    /// * `Err(WizardError)`: the wizard is finished, or a resolver named an unknown question.
    pub fn submit_answer(&mut self, answer: Answer) -> Result<Submission, WizardError> {
        if self.finished {
            return Err(WizardError::Finished);
        }

        let question = &self.questions.questions[self.current_index()];
        let from = question.id().to_string();

        if let Some(message) = question.check(&answer, &self.context) {
            debug!(question = %from, %message, "answer rejected");
            self.last_error = Some(message.clone());
            return Ok(Submission::Rejected(message));
        }

        let mut next_context = self.context.clone();
        next_context.answers.insert(from.clone(), answer.clone());
        question.apply(&answer, &mut next_context, self.ids.as_mut());
        let destination = question.resolve(&answer, &next_context);

        match destination {
            Destination::Complete => {
                self.finished = true;
                self.last_error = None;
                self.context = WizardContext::default();
                let model = next_context.model;
                info!(
                    process = %model.name,
                    lanes = model.lanes.len(),
                    steps = model.steps.len(),
                    "wizard completed"
                );
                if let Some(callback) = self.on_complete.as_mut() {
                    callback(&model);
                }
                Ok(Submission::Completed(model))
            }
            Destination::Question(to) => {
                let target = self
                    .questions
                    .position(&to)
                    .ok_or_else(|| WizardError::UnknownQuestion {
                        from: from.clone(),
                        to: to.clone(),
                    })?;

                if target == ENTRY {
                    info!(from = %from, "wizard restarted");
                    self.restart();
                    return Ok(Submission::Restarted);
                }

                self.context = next_context;
                self.history.push(target);
                self.last_error = None;
                debug!(from = %from, to = %to, "wizard advanced");
                Ok(Submission::Advanced { to })
            }
        }
    }

    /// Returns to the previously shown question. Collected data is kept.
    ///
    /// Returns `false` (and does nothing else) when already at the entry question.
    pub fn go_back(&mut self) -> bool {
        self.last_error = None;
        if self.finished || self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        debug!(to = %self.current_question().id(), "wizard went back");
        true
    }

    pub fn current_question(&self) -> &Question {
        &self.questions.questions[self.current_index()]
    }

    pub fn current_question_id(&self) -> &str {
        self.current_question().id()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn context(&self) -> &WizardContext {
        &self.context
    }

    /// Ids of the visited questions, entry first and the current question last.
    pub fn history(&self) -> Vec<&str> {
        self.history
            .iter()
            .map(|&i| self.questions.questions[i].id())
            .collect()
    }

    /// Names of the lanes collected so far, for populating a table question's lane column.
    pub fn lane_names(&self) -> Vec<String> {
        self.context
            .model
            .lanes
            .iter()
            .map(|l| l.name.clone())
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    fn current_index(&self) -> usize {
        self.history.last().copied().unwrap_or(ENTRY)
    }
}
