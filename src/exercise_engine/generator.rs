use log::debug;
use rand::Rng;

use crate::exercise_engine::{
    helpers::{isotope_label, percent_from_hundredths, round_to, subject_name},
    models::{Isotope, Problem},
};

pub const MIN_ISOTOPES: usize = 2;
pub const MAX_ISOTOPES: usize = 3;

/// Every isotope gets at least this share, in hundredths of a percent (10%).
pub const MIN_ABUNDANCE_HUNDREDTHS: u32 = 1_000;
const TOTAL_HUNDREDTHS: u32 = 10_000;

const MIN_BASE_MASS: u32 = 10;
const MAX_BASE_MASS: u32 = 199;
/// Chance that an isotope sits two mass units per index away instead of one.
const WIDE_STEP_PROBABILITY: f64 = 0.3;
const MAX_MASS_DEVIATION: f64 = 0.1;

/// Generate one weighted-average problem for the synthetic element `base`.
///
/// Abundances are drawn in hundredths of a percent so the table always sums
/// to exactly 100.00; each non-final isotope leaves room for the 10% floor of
/// every isotope after it, and the final one takes the remainder.
pub fn generate_problem<R: Rng>(rng: &mut R, base: &str, id: impl Into<String>) -> Problem {
    let id = id.into();
    let count = rng.gen_range(MIN_ISOTOPES..=MAX_ISOTOPES);
    let base_mass = rng.gen_range(MIN_BASE_MASS..=MAX_BASE_MASS);

    let mut isotopes = Vec::with_capacity(count);
    let mut remaining = TOTAL_HUNDREDTHS;
    let mut weighted_sum = 0.0;

    for i in 0..count {
        let left_after = (count - i - 1) as u32;
        let hundredths = if left_after == 0 {
            remaining
        } else {
            let max = remaining - MIN_ABUNDANCE_HUNDREDTHS * left_after;
            rng.gen_range(MIN_ABUNDANCE_HUNDREDTHS..=max)
        };
        remaining -= hundredths;
        let abundance_percent = percent_from_hundredths(hundredths);

        let step = if rng.gen_bool(WIDE_STEP_PROBABILITY) { 2 } else { 1 };
        let mass_number = base_mass + i as u32 * step;
        let deviation = rng.gen_range(-MAX_MASS_DEVIATION..=MAX_MASS_DEVIATION);
        let precise_mass = round_to(f64::from(mass_number) + deviation, 3);

        weighted_sum += precise_mass * abundance_percent / 100.0;

        isotopes.push(Isotope {
            label: isotope_label(base, mass_number),
            precise_mass,
            abundance_percent,
            mass_number,
        });
    }

    let correct_answer = round_to(weighted_sum, 3);
    debug!(
        "generated {id}: {} isotopes around mass {base_mass}, answer {correct_answer:.3}",
        isotopes.len()
    );

    Problem {
        id,
        subject_name: subject_name(base),
        isotopes,
        correct_answer,
    }
}
