//! Core exercise engine: problem generation, set building, and answer checking.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: isotopes, problems, verdicts, the set request |
//! | `helpers`     | Rounding, fixed-decimal formatting, label and id builders |
//! | `pool`        | Subject-name pool with Fisher-Yates shuffle, drawn without replacement |
//! | `generator`   | One self-consistent isotope table plus its weighted-average answer |
//! | `problem_set` | Entry point `generate_problem_set()`: one problem per drawn subject |
//! | `checker`     | Tolerance and unit check for free-text answers |
//! | `feedback`    | Per-card feedback state and learner-facing messages |
//! | `tutorial`    | Static concept card content |
//! | `error`       | The request loading error |

pub mod checker;
pub mod error;
pub mod feedback;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod pool;
pub mod problem_set;
pub mod tutorial;

// Re-export the public API surface so callers can use
// `exercise_engine::generate_problem_set` without reaching into sub-modules.
pub use checker::{check_answer, check_answer_value, ANSWER_TOLERANCE};
pub use error::RequestError;
pub use feedback::{FeedbackStatus, ProblemAttempt};
pub use generator::generate_problem;
pub use models::{AnswerVerdict, Isotope, Problem, ProblemSetRequest};
pub use problem_set::{generate_problem_set, generate_set};
pub use tutorial::{concept_card, ConceptCard};
