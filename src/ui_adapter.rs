use serde_json::{json, Value};
use crate::exercise_engine::models::{Isotope, Problem};

/// Legend colors, cycled by isotope index.
const PALETTE: [&str; 3] = ["#4f46e5", "#06b6d4", "#8b5cf6"];

const PROMPT: &str =
    "Calculate the average atomic mass based on the following isotopic data:";
const PLACEHOLDER: &str = "e.g., 55.123 amu";

fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One table row: label, fixed-decimal mass and abundance, legend dot color.
fn table_row(index: usize, iso: &Isotope) -> Value {
    json!({
        "label":     iso.label,
        "mass":      iso.mass_display(),
        "abundance": format!("{}%", iso.abundance_display()),
        "color":     color_for(index),
    })
}

/// One chart slice; the value stays numeric for the chart library.
fn chart_slice(index: usize, iso: &Isotope) -> Value {
    json!({
        "name":  iso.short_label(),
        "value": iso.abundance_percent,
        "color": color_for(index),
    })
}

/// Map a [`Problem`] to the card view-model consumed by the page.
///
/// `index` is the card's position in the set. The correct answer is left
/// out; clients check answers through the library.
pub fn to_problem_card(problem: &Problem, index: usize) -> Value {
    let rows: Vec<Value> = problem
        .isotopes
        .iter()
        .enumerate()
        .map(|(i, iso)| table_row(i, iso))
        .collect();
    let slices: Vec<Value> = problem
        .isotopes
        .iter()
        .enumerate()
        .map(|(i, iso)| chart_slice(i, iso))
        .collect();

    json!({
        "id":          problem.id,
        "title":       format!("Problem {}: {}", index + 1, problem.subject_name),
        "subject":     problem.subject_name,
        "prompt":      PROMPT,
        "table": {
            "columns": ["Isotope", "Mass (amu)", "Abundance (%)"],
            "rows":    rows,
        },
        "chart":       slices,
        "input_id":    format!("input-{}", problem.id),
        "placeholder": PLACEHOLDER,
    })
}

/// Map a whole set to `{ "problems": [...] }` in display order.
pub fn to_problem_set_view(problems: &[Problem]) -> Value {
    let cards: Vec<Value> = problems
        .iter()
        .enumerate()
        .map(|(i, p)| to_problem_card(p, i))
        .collect();
    json!({ "problems": cards })
}
