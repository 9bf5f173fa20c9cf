use std::fmt;
use serde::{Deserialize, Serialize};

use crate::exercise_engine::{checker, error::RequestError, helpers::fixed};

/// Number of problems shown on a fresh page.
pub const DEFAULT_SET_SIZE: i64 = 4;

// ---------------------------------------------------------------------------
// Isotope table
// ---------------------------------------------------------------------------

/// One row of a problem's abundance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isotope {
    /// Display name, e.g. "Element Alpha-87".
    pub label: String,
    /// Isotope mass in amu, rounded to 3 decimals.
    pub precise_mass: f64,
    /// Natural abundance in percent, rounded to 2 decimals.
    pub abundance_percent: f64,
    pub mass_number: u32,
}

impl Isotope {
    /// Mass as shown in the table, e.g. "86.912".
    pub fn mass_display(&self) -> String {
        fixed(self.precise_mass, 3)
    }

    /// Abundance as shown in the table, without the percent sign.
    pub fn abundance_display(&self) -> String {
        fixed(self.abundance_percent, 2)
    }

    /// Label without the "Element " prefix, used for chart legends.
    pub fn short_label(&self) -> &str {
        self.label.strip_prefix("Element ").unwrap_or(&self.label)
    }
}

// ---------------------------------------------------------------------------
// Problem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Stable within one generated set: "problem-0", "problem-1", ...
    pub id: String,
    pub subject_name: String,
    /// Generation order; also the color-legend order.
    pub isotopes: Vec<Isotope>,
    /// Weighted average atomic mass, rounded to 3 decimals.
    pub correct_answer: f64,
}

impl Problem {
    /// The expected answer as the fixed-decimal string learners compare against.
    pub fn correct_answer_display(&self) -> String {
        fixed(self.correct_answer, 3)
    }

    /// Classify a learner's free-text answer to this problem.
    pub fn check(&self, input: &str) -> AnswerVerdict {
        checker::check_answer_value(input, self.correct_answer)
    }
}

// ---------------------------------------------------------------------------
// Answer verdict
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerVerdict {
    /// Within tolerance and carries the "amu" unit.
    Correct,
    /// Within tolerance but the unit is missing.
    MissingUnit,
    Incorrect,
}

impl fmt::Display for AnswerVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerVerdict::Correct     => write!(f, "correct"),
            AnswerVerdict::MissingUnit => write!(f, "missing_unit"),
            AnswerVerdict::Incorrect   => write!(f, "incorrect"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Parameters for [`generate_problem_set`](crate::generate_problem_set).
///
/// `count` is signed because it usually arrives from a UI or a JSON payload;
/// zero or negative values produce an empty set instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemSetRequest {
    pub count: i64,
    /// `None` seeds from system entropy.
    pub rng_seed: Option<u64>,
}

impl Default for ProblemSetRequest {
    fn default() -> Self {
        Self { count: DEFAULT_SET_SIZE, rng_seed: None }
    }
}

impl ProblemSetRequest {
    /// Default page-sized request seeded from entropy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Parse a request from JSON. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Requested count clamped to a usable length; negatives become zero.
    pub fn effective_count(&self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }
}
