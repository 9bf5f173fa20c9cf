//! End-to-end demo of the atomic mass drill.
//!
//! Run with: `cargo run --example demo`
//! Add `RUST_LOG=debug` to see generator log records.
//!
//! 1. **Concept card**: the explainer shown above the problems.
//! 2. **Seeded set**: four problems from a fixed seed, so the output is
//!    reproducible, each followed by a few sample answers and the feedback a
//!    learner would see.
//! 3. **View model**: the JSON card a page renders for the first problem.

use atomic_mass_drill::{
    concept_card, generate_problem_set, to_problem_card, Problem, ProblemAttempt,
    ProblemSetRequest,
};

/// Pretty-print one problem as the learner sees it.
fn print_problem(index: usize, problem: &Problem) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Problem {}: {}  ID: {}", index + 1, problem.subject_name, problem.id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {:<22} {:>10} {:>14}", "Isotope", "Mass (amu)", "Abundance (%)");
    for iso in &problem.isotopes {
        println!(
            "  {:<22} {:>10} {:>13}%",
            iso.label,
            iso.mass_display(),
            iso.abundance_display()
        );
    }
    println!();
}

/// Submit sample answers in order and print the feedback after each.
fn run_attempts(problem: &Problem) {
    let shown = problem.correct_answer_display();
    let samples = [
        "I don't know".to_string(),
        format!("{:.3} amu", problem.correct_answer + 1.0),
        shown.clone(),
        format!("{shown} amu"),
        "locked after success".to_string(),
    ];

    let mut attempt = ProblemAttempt::new();
    for input in &samples {
        let status = attempt.submit(problem, input);
        let message = attempt.message(problem).unwrap_or_default();
        println!("  > {input:<22} [{status}] {message}");
    }
    println!();
}

fn main() {
    env_logger::init();

    let card = concept_card();
    println!();
    println!("══ {} ══", card.title);
    println!("  {}", card.explanation);
    println!("  {}", card.formula);
    for (i, step) in card.steps.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
    println!();

    let problems = generate_problem_set(ProblemSetRequest::new().with_seed(2024));
    for (index, problem) in problems.iter().enumerate() {
        print_problem(index, problem);
        run_attempts(problem);
    }

    if let Some(first) = problems.first() {
        println!("══ View model for {} ══", first.id);
        match serde_json::to_string_pretty(&to_problem_card(first, 0)) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("could not render view model: {e}"),
        }
    }
}
