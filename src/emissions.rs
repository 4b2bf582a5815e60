//! Emission factors and the pure kgCO2 calculations.
//!
//! Every function here is total over validated input: bills, waste and
//! distance are non-negative and `fuel_efficiency` is strictly positive.
//! Nothing in this module checks those preconditions; [`calculate`] runs the
//! validator first and is the only entry point that accepts raw submissions.

use serde::Serialize;

use crate::submission::{Submission, ValidationError, validate};

/// Monthly inputs are annualized with this factor.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// kgCO2 per euro spent on electricity.
pub const ELECTRICITY_KGCO2_PER_EURO: f64 = 0.0005;

/// kgCO2 per euro spent on natural gas.
pub const NATURAL_GAS_KGCO2_PER_EURO: f64 = 0.0053;

/// kgCO2 per euro spent on fuel.
pub const FUEL_KGCO2_PER_EURO: f64 = 2.32;

/// kgCO2 per kg of waste generated.
pub const WASTE_KGCO2_PER_KG: f64 = 0.57;

/// kgCO2 per liter of fuel burned while traveling.
pub const TRAVEL_KGCO2_PER_LITER: f64 = 2.31;

/// Annual kgCO2 from monthly energy spend.
pub fn energy_emissions(electricity_bill: f64, natural_gas_bill: f64, fuel_bill: f64) -> f64 {
    let electricity = electricity_bill * MONTHS_PER_YEAR * ELECTRICITY_KGCO2_PER_EURO;
    let natural_gas = natural_gas_bill * MONTHS_PER_YEAR * NATURAL_GAS_KGCO2_PER_EURO;
    let fuel = fuel_bill * MONTHS_PER_YEAR * FUEL_KGCO2_PER_EURO;
    electricity + natural_gas + fuel
}

/// Annual kgCO2 from monthly waste, offset by the recycling percentage.
///
/// The offset subtracts the percentage value itself (30 for 30%), not a
/// recycled mass, so the result is negative for small waste volumes. Historic
/// reports were computed this way and stay comparable only while it does.
pub fn waste_emissions(waste_per_month: f64, recycling_percent: u8) -> f64 {
    waste_per_month * MONTHS_PER_YEAR * WASTE_KGCO2_PER_KG - f64::from(recycling_percent)
}

/// kgCO2 for the distance traveled at the given fuel efficiency (L/100km).
///
/// The distance is divided by the raw L/100km figure, without the factor of
/// 100 a liters estimate would need.
pub fn travel_emissions(distance_km: f64, fuel_efficiency: f64) -> f64 {
    distance_km / fuel_efficiency * TRAVEL_KGCO2_PER_LITER
}

/// Percentage of `total` contributed by `part`, or 0 when `total` is exactly 0.
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

/// One of the three emission categories, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Energy,
    Waste,
    Travel,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 3] = [Category::Energy, Category::Waste, Category::Travel];

    /// Human-readable name used in rankings and tables.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Energy => "Energy Usage",
            Category::Waste => "Waste",
            Category::Travel => "Business Travel",
        }
    }

    /// Short tab name used in the suggestions export.
    pub fn short_label(&self) -> &'static str {
        match self {
            Category::Energy => "Energy",
            Category::Waste => "Waste",
            Category::Travel => "Travel",
        }
    }

    /// Message shown when no threshold rule produced advice for the category.
    pub fn well_managed_message(&self) -> &'static str {
        match self {
            Category::Energy => "Your energy usage is relatively efficient. Continue monitoring!",
            Category::Waste => "Your waste management is effective. Keep up the good work!",
            Category::Travel => "Your business travel emissions are well managed!",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category annual emissions for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionBreakdown {
    energy_kgco2: f64,
    waste_kgco2: f64,
    travel_kgco2: f64,
    total_kgco2: f64,
}

impl EmissionBreakdown {
    /// Build a breakdown from the three category estimates.
    pub fn new(energy_kgco2: f64, waste_kgco2: f64, travel_kgco2: f64) -> Self {
        Self {
            energy_kgco2,
            waste_kgco2,
            travel_kgco2,
            total_kgco2: energy_kgco2 + waste_kgco2 + travel_kgco2,
        }
    }

    /// Run the calculator over a submission that already passed validation.
    pub(crate) fn from_valid(submission: &Submission) -> Self {
        Self::new(
            energy_emissions(
                submission.electricity_bill,
                submission.natural_gas_bill,
                submission.fuel_bill,
            ),
            waste_emissions(submission.waste_per_month, submission.recycling_percent),
            travel_emissions(submission.distance_km, submission.fuel_efficiency),
        )
    }

    pub fn energy_kgco2(&self) -> f64 {
        self.energy_kgco2
    }

    pub fn waste_kgco2(&self) -> f64 {
        self.waste_kgco2
    }

    pub fn travel_kgco2(&self) -> f64 {
        self.travel_kgco2
    }

    pub fn total_kgco2(&self) -> f64 {
        self.total_kgco2
    }

    /// Emissions of a single category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Energy => self.energy_kgco2,
            Category::Waste => self.waste_kgco2,
            Category::Travel => self.travel_kgco2,
        }
    }

    /// Percentage of the total contributed by `category`.
    pub fn share(&self, category: Category) -> f64 {
        share_percent(self.get(category), self.total_kgco2)
    }

    /// The detailed breakdown table, one row per category.
    pub fn rows(&self) -> [CategoryShare; 3] {
        Category::ALL.map(|category| CategoryShare {
            category,
            kgco2: self.get(category),
            percent: self.share(category),
        })
    }
}

/// A row of the detailed breakdown table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub kgco2: f64,
    pub percent: f64,
}

/// Validate a submission and, if it passes, compute its breakdown.
///
/// Fails with every validation message collected, never just the first.
pub fn calculate(submission: &Submission) -> Result<EmissionBreakdown, ValidationError> {
    validate(submission).into_result()?;
    Ok(EmissionBreakdown::from_valid(submission))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn test_energy_example() {
        // 6 + 31.8 + 22272
        assert_relative_eq!(energy_emissions(1000.0, 500.0, 800.0), 22309.8, epsilon = 1e-9);
    }

    #[test]
    fn test_waste_example() {
        assert_relative_eq!(waste_emissions(1000.0, 30), 6810.0, epsilon = 1e-9);
    }

    #[test]
    fn test_waste_without_waste_is_negative_percentage() {
        assert_eq!(waste_emissions(0.0, 30), -30.0);
        assert_eq!(waste_emissions(0.0, 0), 0.0);
    }

    #[test]
    fn test_travel_example() {
        assert_relative_eq!(travel_emissions(100.0, 8.0), 28.875, epsilon = 1e-12);
        assert_eq!(travel_emissions(0.0, 8.0), 0.0);
    }

    #[test]
    fn test_breakdown_total_and_shares() {
        let breakdown = EmissionBreakdown::new(50.0, 30.0, 20.0);
        assert_eq!(breakdown.total_kgco2(), 100.0);
        assert_relative_eq!(breakdown.share(Category::Energy), 50.0);
        assert_relative_eq!(breakdown.share(Category::Waste), 30.0);
        assert_relative_eq!(breakdown.share(Category::Travel), 20.0);

        let rows = breakdown.rows();
        let categories: Vec<Category> = rows.iter().map(|r| r.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_share_of_zero_total_is_zero() {
        // Waste offset can cancel the other categories exactly.
        let breakdown = EmissionBreakdown::new(30.0, -30.0, 0.0);
        assert_eq!(breakdown.total_kgco2(), 0.0);
        for category in Category::ALL {
            assert_eq!(breakdown.share(category), 0.0);
        }
    }

    #[test]
    fn test_calculate_rejects_invalid_submission() {
        let submission = Submission {
            company_name: String::new(),
            report_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            ..Submission::default()
        };
        let err = calculate(&submission).unwrap_err();
        assert!(err.messages().len() >= 2);
    }

    #[test]
    fn test_calculate_valid_submission() {
        let submission = Submission {
            company_name: "Acme".into(),
            report_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            electricity_bill: 1000.0,
            natural_gas_bill: 500.0,
            fuel_bill: 800.0,
            waste_per_month: 1000.0,
            recycling_percent: 30,
            distance_km: 100.0,
            fuel_efficiency: 8.0,
        };
        let breakdown = calculate(&submission).unwrap();
        assert_relative_eq!(breakdown.energy_kgco2(), 22309.8, epsilon = 1e-9);
        assert_relative_eq!(breakdown.waste_kgco2(), 6810.0, epsilon = 1e-9);
        assert_relative_eq!(breakdown.travel_kgco2(), 28.875, epsilon = 1e-12);
        assert_relative_eq!(breakdown.total_kgco2(), 22309.8 + 6810.0 + 28.875, epsilon = 1e-9);
    }
}
