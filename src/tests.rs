//! Crate-level property tests for `atomic_mass_drill`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical set; different seeds → varied sets |
//! | Table invariants | Abundances sum to 100; 2–3 isotopes; answer recomputes from the table |
//! | Set shape | Capped at pool size; distinct subjects; positional ids |
//! | Checking | Worked examples; generated answers round-trip through the checker |
//! | Entropy | `rng_seed: None` produces valid problems (smoke test) |

use std::collections::HashSet;

use crate::exercise_engine::{
    check_answer, generate_problem_set, helpers::round_to, pool::SUBJECT_NAMES,
    AnswerVerdict, Problem, ProblemSetRequest,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn req(count: i64, seed: u64) -> ProblemSetRequest {
    ProblemSetRequest { count, rng_seed: Some(seed) }
}

/// Seeds that span different RNG states.
const SEEDS: [u64; 6] = [1, 42, 999, 0xDEAD_BEEF, 7, 2024];

/// Every problem from a full-pool set for each seed.
fn all_problems() -> Vec<Problem> {
    SEEDS
        .iter()
        .flat_map(|&seed| generate_problem_set(req(SUBJECT_NAMES.len() as i64, seed)))
        .collect()
}

fn recomputed_answer(problem: &Problem) -> f64 {
    let sum: f64 = problem
        .isotopes
        .iter()
        .map(|iso| iso.precise_mass * iso.abundance_percent / 100.0)
        .sum();
    round_to(sum, 3)
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_set() {
    for seed in SEEDS {
        assert_eq!(
            generate_problem_set(req(4, seed)),
            generate_problem_set(req(4, seed)),
            "set mismatch for seed={seed}"
        );
    }
}

#[test]
fn different_seeds_vary_membership_or_order() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let names = |s: u64| -> Vec<String> {
            generate_problem_set(req(4, s)).into_iter().map(|p| p.subject_name).collect()
        };
        if names(seed) == names(seed + 500) {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical subject orders across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_seed_produces_valid_problems() {
    let problems = generate_problem_set(ProblemSetRequest::new());
    assert_eq!(problems.len(), 4);
    for p in &problems {
        let sum: f64 = p.isotopes.iter().map(|i| i.abundance_percent).sum();
        assert!((sum - 100.0).abs() <= 0.01);
        assert!((p.correct_answer - recomputed_answer(p)).abs() < 1e-9);
    }
}

// ── table invariants ─────────────────────────────────────────────────────────

#[test]
fn abundances_sum_to_100() {
    for p in all_problems() {
        let sum: f64 = p.isotopes.iter().map(|i| i.abundance_percent).sum();
        assert!((sum - 100.0).abs() <= 0.01, "{}: abundances sum to {sum}", p.id);
    }
}

#[test]
fn isotope_count_is_two_or_three() {
    for p in all_problems() {
        assert!(
            (2..=3).contains(&p.isotopes.len()),
            "{} has {} isotopes",
            p.id,
            p.isotopes.len()
        );
    }
}

#[test]
fn correct_answer_recomputes_from_table() {
    for p in all_problems() {
        let expected = recomputed_answer(&p);
        assert!(
            (p.correct_answer - expected).abs() < 1e-9,
            "{} ({}): stored {} vs recomputed {expected}",
            p.id,
            p.subject_name,
            p.correct_answer
        );
    }
}

#[test]
fn displayed_values_keep_their_precision() {
    for p in all_problems() {
        for iso in &p.isotopes {
            let mass = iso.mass_display();
            let pct = iso.abundance_display();
            assert_eq!(mass.split('.').nth(1).map(str::len), Some(3), "{mass}");
            assert_eq!(pct.split('.').nth(1).map(str::len), Some(2), "{pct}");
        }
    }
}

// ── set shape ────────────────────────────────────────────────────────────────

#[test]
fn set_size_is_min_of_request_and_pool() {
    for count in [0i64, 1, 4, 8, 9, 100] {
        let set = generate_problem_set(req(count, 3));
        let expected = (count as usize).min(SUBJECT_NAMES.len());
        assert_eq!(set.len(), expected, "count={count}");
    }
}

#[test]
fn subjects_and_ids_are_unique() {
    for seed in SEEDS {
        let set = generate_problem_set(req(8, seed));
        let names: HashSet<&str> = set.iter().map(|p| p.subject_name.as_str()).collect();
        let ids: HashSet<&str> = set.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(names.len(), set.len(), "duplicate subject for seed={seed}");
        assert_eq!(ids.len(), set.len(), "duplicate id for seed={seed}");
    }
}

#[test]
fn non_positive_counts_yield_empty_sets() {
    assert!(generate_problem_set(req(0, 1)).is_empty());
    assert!(generate_problem_set(req(-5, 1)).is_empty());
}

#[test]
fn request_loaded_from_json_drives_generation() {
    let request = ProblemSetRequest::from_json(r#"{ "count": 2, "rng_seed": 77 }"#).unwrap();
    assert_eq!(generate_problem_set(request), generate_problem_set(req(2, 77)));
}

// ── checking ─────────────────────────────────────────────────────────────────

#[test]
fn worked_examples() {
    assert_eq!(check_answer("55.123 amu", "55.123"), AnswerVerdict::Correct);
    assert_eq!(check_answer("55.123", "55.123"), AnswerVerdict::MissingUnit);
    assert_eq!(check_answer("55.200 amu", "55.123"), AnswerVerdict::Incorrect);
    assert_eq!(check_answer("55.126 amu", "55.123"), AnswerVerdict::Correct);
    assert_eq!(check_answer("", "55.123"), AnswerVerdict::Incorrect);
    assert_eq!(check_answer("not a number", "55.123"), AnswerVerdict::Incorrect);
}

#[test]
fn generated_answers_check_as_expected() {
    for p in all_problems() {
        let shown = p.correct_answer_display();
        assert_eq!(check_answer(&format!("{shown} amu"), &shown), AnswerVerdict::Correct);
        assert_eq!(check_answer(&shown, &shown), AnswerVerdict::MissingUnit);
        assert_eq!(p.check(&format!("{shown} AMU")), AnswerVerdict::Correct);

        let off = format!("{:.3} amu", p.correct_answer + 0.5);
        assert_eq!(p.check(&off), AnswerVerdict::Incorrect, "{} accepted {off}", p.id);
    }
}
