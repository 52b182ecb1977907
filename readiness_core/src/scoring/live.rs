//! Incremental running score for an assessment in progress.

use crate::likert::Likert;
use crate::types::{QuestionId, Responses};

use super::percentage;

/// Running score kept up to date after every answer.
///
/// Holds the answers plus a running sum, so `set`, `clear` and `score`
/// are O(1). `score()` always equals `compute_overall_score(responses())`.
#[derive(Debug, Clone, Default)]
pub struct LiveScore {
    responses: Responses,
    sum: u32,
}

impl LiveScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from answers already given, e.g. when resuming an assessment.
    pub fn from_responses(responses: Responses) -> Self {
        let sum = responses.values().map(|v| v.value() as u32).sum();
        Self { responses, sum }
    }

    /// Record or replace an answer and return the updated score.
    pub fn set(&mut self, id: impl Into<QuestionId>, value: Likert) -> u8 {
        if let Some(previous) = self.responses.insert(id, value) {
            self.sum -= previous.value() as u32;
        }
        self.sum += value.value() as u32;
        self.score()
    }

    /// Withdraw an answer and return the updated score.
    pub fn clear(&mut self, id: &QuestionId) -> u8 {
        if let Some(previous) = self.responses.remove(id) {
            self.sum -= previous.value() as u32;
        }
        self.score()
    }

    pub fn score(&self) -> u8 {
        percentage(self.sum, self.responses.len())
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    pub fn into_responses(self) -> Responses {
        self.responses
    }
}
