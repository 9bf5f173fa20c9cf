//! Free-text answer classification.
//!
//! A learner answer is accepted when its leading number lies within
//! [`ANSWER_TOLERANCE`] of the expected value. Whether the unit token is
//! present decides between a full and a partial success.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::exercise_engine::models::AnswerVerdict;

/// Maximum absolute difference accepted; matches the 3-decimal answer display.
pub const ANSWER_TOLERANCE: f64 = 0.005;

/// Unit token required for a fully correct answer, matched case-insensitively.
pub const UNIT_TOKEN: &str = "amu";

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("leading number pattern is valid")
});

/// Classify `input` against the fixed-decimal `correct_answer` string.
///
/// An unparseable `correct_answer` can only come from outside the generator;
/// it is treated like any other mismatch.
pub fn check_answer(input: &str, correct_answer: &str) -> AnswerVerdict {
    match correct_answer.trim().parse::<f64>() {
        Ok(expected) => check_answer_value(input, expected),
        Err(_) => AnswerVerdict::Incorrect,
    }
}

/// Classify `input` against a numeric expected value.
pub fn check_answer_value(input: &str, expected: f64) -> AnswerVerdict {
    let input = input.trim();
    let Some(value) = leading_number(input) else {
        trace!("answer {input:?} has no leading number");
        return AnswerVerdict::Incorrect;
    };

    let verdict = if (value - expected).abs() <= ANSWER_TOLERANCE {
        if has_unit(input) {
            AnswerVerdict::Correct
        } else {
            AnswerVerdict::MissingUnit
        }
    } else {
        AnswerVerdict::Incorrect
    };
    trace!("answer {input:?} vs {expected:.3}: {verdict}");
    verdict
}

/// Parse the number at the start of `text`, ignoring whatever follows it.
///
/// `"55.1amu"` gives 55.1 and `".5 amu"` gives 0.5; text that does not open
/// with a number gives `None`.
pub fn leading_number(text: &str) -> Option<f64> {
    let m = LEADING_NUMBER.find(text.trim_start())?;
    m.as_str().parse().ok()
}

/// True if the unit token appears anywhere in `text`, in any case.
pub fn has_unit(text: &str) -> bool {
    text.to_lowercase().contains(UNIT_TOKEN)
}
