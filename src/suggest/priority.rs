//! Ranking of emission categories into priority actions.

use crate::emissions::{Category, EmissionBreakdown};

/// Categories ordered by descending emissions.
///
/// Ties keep presentation order (energy, waste, travel) because the sort is
/// stable.
pub fn rank_categories(breakdown: &EmissionBreakdown) -> [(Category, f64); 3] {
    let mut ranked = Category::ALL.map(|category| (category, breakdown.get(category)));
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// The three priority action lines, highest impact first.
pub fn priority_actions(breakdown: &EmissionBreakdown) -> [String; 3] {
    let [(first, first_kg), (second, second_kg), (third, third_kg)] = rank_categories(breakdown);
    [
        format!("Focus on {first}: Highest impact area ({first_kg:.2} kgCO2)"),
        format!("Secondary focus on {second}: ({second_kg:.2} kgCO2)"),
        format!("Monitor {third}: ({third_kg:.2} kgCO2)"),
    ]
}
