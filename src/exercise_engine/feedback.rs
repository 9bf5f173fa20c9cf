use std::fmt;
use serde::{Deserialize, Serialize};

use crate::exercise_engine::models::{AnswerVerdict, Problem};

/// Per-card feedback state, driven only by checker verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    Success,
    Error,
    MissingUnit,
}

impl From<AnswerVerdict> for FeedbackStatus {
    fn from(verdict: AnswerVerdict) -> Self {
        match verdict {
            AnswerVerdict::Correct     => FeedbackStatus::Success,
            AnswerVerdict::MissingUnit => FeedbackStatus::MissingUnit,
            AnswerVerdict::Incorrect   => FeedbackStatus::Error,
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackStatus::Idle        => write!(f, "Idle"),
            FeedbackStatus::Success     => write!(f, "Success"),
            FeedbackStatus::Error       => write!(f, "Error"),
            FeedbackStatus::MissingUnit => write!(f, "Missing Unit"),
        }
    }
}

impl FeedbackStatus {
    /// Learner-facing message for this status; `Idle` has none.
    pub fn message(self, problem: &Problem) -> Option<String> {
        match self {
            FeedbackStatus::Idle => None,
            FeedbackStatus::Error => Some(
                "Incorrect. Remember to convert percentages to decimals \
                 (e.g., 50% = 0.50) before multiplying."
                    .to_string(),
            ),
            FeedbackStatus::MissingUnit => Some(
                "Almost there! The number is correct, but you are missing the unit amu."
                    .to_string(),
            ),
            FeedbackStatus::Success => Some(format!(
                "Great job! The average atomic mass is {} amu.",
                problem.correct_answer_display()
            )),
        }
    }

    pub fn is_solved(self) -> bool {
        self == FeedbackStatus::Success
    }
}

/// One learner's progress on one problem card.
///
/// A solved card is locked: later submissions are ignored and the status
/// stays `Success`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemAttempt {
    status: FeedbackStatus,
    submissions: u32,
}

impl ProblemAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FeedbackStatus {
        self.status
    }

    /// Number of submissions that reached the checker.
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Check `input` against `problem` and move to the resulting state.
    pub fn submit(&mut self, problem: &Problem, input: &str) -> FeedbackStatus {
        if self.status.is_solved() {
            return self.status;
        }
        self.submissions += 1;
        self.status = problem.check(input).into();
        self.status
    }

    pub fn message(&self, problem: &Problem) -> Option<String> {
        self.status.message(problem)
    }
}
