use serde::{Deserialize, Serialize};

/// Static explainer shown above the problem list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptCard {
    pub title: String,
    pub explanation: String,
    pub formula: String,
    /// Numbered solving steps, in order.
    pub steps: Vec<String>,
}

pub fn concept_card() -> ConceptCard {
    ConceptCard {
        title: "The Concept".to_string(),
        explanation: "The average atomic mass is the weighted average of all the naturally \
                      occurring isotopes of an element. It accounts for how common each \
                      isotope is in nature."
            .to_string(),
        formula: "Average Mass = (Mass₁ × %Abundance₁) + (Mass₂ × %Abundance₂) + ..."
            .to_string(),
        steps: vec![
            "Convert percentages to decimals (÷ 100)".to_string(),
            "Round final answer to 3 decimal places".to_string(),
            "Don't forget the unit \"amu\"".to_string(),
        ],
    }
}
