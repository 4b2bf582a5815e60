//! Reduction suggestions derived from a breakdown and its raw inputs.
//!
//! Suggestions come from independent threshold rules (see [`RULES`]) plus a
//! ranking of the three categories into exactly three priority actions.
//! Generation is a pure function of its inputs.

mod export;
mod priority;
mod rules;

use serde::Serialize;

use crate::emissions::{Category, EmissionBreakdown};
use crate::submission::Submission;

pub use priority::{priority_actions, rank_categories};
pub use rules::{RECYCLING_TARGET_PERCENT, RULES, SuggestionInputs, ThresholdRule, Trigger};

/// Categorized reduction advice for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionSet {
    pub energy: Vec<String>,
    pub waste: Vec<String>,
    pub travel: Vec<String>,
    /// Exactly three lines, highest impact category first.
    pub priority_actions: [String; 3],
}

impl SuggestionSet {
    /// Advice for one category; empty when no rule fired.
    pub fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Energy => &self.energy,
            Category::Waste => &self.waste,
            Category::Travel => &self.travel,
        }
    }

    /// True when no rule fired for `category`.
    pub fn is_well_managed(&self, category: Category) -> bool {
        self.for_category(category).is_empty()
    }

    /// Advice lines for `category`, or its well-managed message when empty.
    pub fn lines_or_fallback(&self, category: Category) -> Vec<&str> {
        let lines = self.for_category(category);
        if lines.is_empty() {
            vec![category.well_managed_message()]
        } else {
            lines.iter().map(String::as_str).collect()
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Energy => &mut self.energy,
            Category::Waste => &mut self.waste,
            Category::Travel => &mut self.travel,
        }
    }
}

/// Apply every threshold rule and rank the categories.
pub fn generate(inputs: &SuggestionInputs) -> SuggestionSet {
    let breakdown =
        EmissionBreakdown::new(inputs.energy_kgco2, inputs.waste_kgco2, inputs.travel_kgco2);

    let mut set = SuggestionSet {
        energy: Vec::new(),
        waste: Vec::new(),
        travel: Vec::new(),
        priority_actions: priority_actions(&breakdown),
    };

    for rule in &RULES {
        rule.apply(inputs, set.list_mut(rule.category));
    }

    set
}

/// Flat-argument form of [`generate`].
#[allow(clippy::too_many_arguments)]
pub fn generate_suggestions(
    energy: f64,
    waste: f64,
    travel: f64,
    electricity_bill: f64,
    natural_gas_bill: f64,
    fuel_bill: f64,
    waste_per_month: f64,
    recycling_percent: u8,
) -> SuggestionSet {
    generate(&SuggestionInputs {
        energy_kgco2: energy,
        waste_kgco2: waste,
        travel_kgco2: travel,
        electricity_bill,
        natural_gas_bill,
        fuel_bill,
        waste_per_month,
        recycling_percent,
    })
}

/// Suggestions for a calculated submission.
pub fn suggest(breakdown: &EmissionBreakdown, submission: &Submission) -> SuggestionSet {
    generate_suggestions(
        breakdown.energy_kgco2(),
        breakdown.waste_kgco2(),
        breakdown.travel_kgco2(),
        submission.electricity_bill,
        submission.natural_gas_bill,
        submission.fuel_bill,
        submission.waste_per_month,
        submission.recycling_percent,
    )
}
