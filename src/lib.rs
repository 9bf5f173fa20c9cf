//! # atomic_mass_drill
//!
//! An offline, deterministic exercise generator for weighted-average atomic
//! mass.
//!
//! Each problem is a small table of synthetic isotopes (2 or 3 rows) whose
//! abundances sum to exactly 100%, with masses close to integer mass numbers.
//! The learner computes the weighted average and types it in; the checker
//! accepts any value within 0.005 of the answer and asks for the "amu" unit.
//!
//! ## How it works
//!
//! 1. Create a [`ProblemSetRequest`] with a count and optional RNG seed.
//! 2. Call [`generate_problem_set`]: the engine shuffles the subject pool,
//!    draws one synthetic element per problem, and generates its isotope table
//!    and correct answer.
//! 3. Render each [`Problem`] (directly, or through [`ui_adapter`]) and pass
//!    learner input to [`check_answer`] or [`ProblemAttempt::submit`].
//!
//! ## Quick start
//!
//! ```rust
//! use atomic_mass_drill::{
//!     check_answer, generate_problem_set, AnswerVerdict, ProblemSetRequest,
//! };
//!
//! // Four problems, reproducible from the seed:
//! let problems = generate_problem_set(ProblemSetRequest::new().with_seed(42));
//! assert_eq!(problems.len(), 4);
//!
//! let first = &problems[0];
//! for iso in &first.isotopes {
//!     println!("{}  {} amu  {}%", iso.label, iso.mass_display(), iso.abundance_display());
//! }
//!
//! let answer = format!("{} amu", first.correct_answer_display());
//! assert_eq!(check_answer(&answer, &first.correct_answer_display()), AnswerVerdict::Correct);
//! ```

pub mod exercise_engine;
pub mod ui_adapter;

// Convenience re-exports so callers can use `atomic_mass_drill::generate_problem_set`
// directly without reaching into `exercise_engine::`.
pub use exercise_engine::{
    check_answer, check_answer_value, concept_card, generate_problem, generate_problem_set,
    generate_set, AnswerVerdict, ConceptCard, FeedbackStatus, Isotope, Problem,
    ProblemAttempt, ProblemSetRequest, RequestError, ANSWER_TOLERANCE,
};
pub use ui_adapter::{to_problem_card, to_problem_set_view};

#[cfg(test)]
mod tests;
