//! Answer drafts owned by whatever is presenting a question.
//!
//! A front end keeps one of these per list or table question while the user
//! is still typing, and turns it into an [`Answer`] on submit.

use super::question::Answer;
use crate::model::StepRow;

/// A list answer under construction: committed items plus the value being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDraft {
    pending: String,
    items: Vec<String>,
}

impl ListDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pending(&mut self, value: impl Into<String>) {
        self.pending = value.into();
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Moves the trimmed pending value into the list.
    ///
    /// Blank values are ignored, duplicates are discarded. Returns `true` if an
    /// item was added.
    pub fn commit_pending(&mut self) -> bool {
        let value = self.pending.trim().to_string();
        if value.is_empty() {
            return false;
        }
        self.pending.clear();
        if self.items.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn into_answer(self) -> Answer {
        Answer::List(self.items)
    }
}

/// A table answer under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDraft {
    rows: Vec<StepRow>,
}

impl TableDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty row assigned to the first lane, so new rows always start valid.
    /// Returns the new row's index.
    pub fn add_row(&mut self, lanes: &[String]) -> usize {
        let lane = lanes.first().cloned().unwrap_or_default();
        self.rows.push(StepRow::new("", lane));
        self.rows.len() - 1
    }

    pub fn set_action(&mut self, index: usize, action: &str) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.action = action.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_lane(&mut self, index: usize, lane: &str) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.lane = lane.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<StepRow> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    /// Points rows whose lane is no longer listed at the first lane.
    ///
    /// Does nothing while `lanes` is empty. Returns the number of rows changed.
    pub fn realign(&mut self, lanes: &[String]) -> usize {
        let Some(first) = lanes.first() else {
            return 0;
        };
        let mut changed = 0;
        for row in &mut self.rows {
            if !lanes.contains(&row.lane) {
                row.lane = first.clone();
                changed += 1;
            }
        }
        changed
    }

    pub fn rows(&self) -> &[StepRow] {
        &self.rows
    }

    pub fn into_answer(self) -> Answer {
        Answer::Rows(self.rows)
    }
}
