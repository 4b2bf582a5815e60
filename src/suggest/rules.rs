//! Threshold rules mapping input figures to reduction advice.

use crate::emissions::Category;

/// Recycling share the advice aims for.
pub const RECYCLING_TARGET_PERCENT: u8 = 75;

/// Figures the threshold rules look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionInputs {
    pub energy_kgco2: f64,
    pub waste_kgco2: f64,
    pub travel_kgco2: f64,
    pub electricity_bill: f64,
    pub natural_gas_bill: f64,
    pub fuel_bill: f64,
    pub waste_per_month: f64,
    pub recycling_percent: u8,
}

/// The input a rule compares against its limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    ElectricityBillAbove(f64),
    NaturalGasBillAbove(f64),
    FuelBillAbove(f64),
    RecyclingBelow(u8),
    WastePerMonthAbove(f64),
    TravelEmissionsAbove(f64),
}

impl Trigger {
    /// Whether the rule fires for `inputs`. Limits are strict.
    pub fn fires(&self, inputs: &SuggestionInputs) -> bool {
        match *self {
            Trigger::ElectricityBillAbove(limit) => inputs.electricity_bill > limit,
            Trigger::NaturalGasBillAbove(limit) => inputs.natural_gas_bill > limit,
            Trigger::FuelBillAbove(limit) => inputs.fuel_bill > limit,
            Trigger::RecyclingBelow(limit) => inputs.recycling_percent < limit,
            Trigger::WastePerMonthAbove(limit) => inputs.waste_per_month > limit,
            Trigger::TravelEmissionsAbove(limit) => inputs.travel_kgco2 > limit,
        }
    }
}

/// A threshold rule: when `trigger` fires, `advice` is appended to `category`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdRule {
    pub category: Category,
    pub trigger: Trigger,
    pub advice: &'static [&'static str],
}

impl ThresholdRule {
    /// Append this rule's advice to `out` if it fires.
    pub fn apply(&self, inputs: &SuggestionInputs, out: &mut Vec<String>) {
        if !self.trigger.fires(inputs) {
            return;
        }
        if let Trigger::RecyclingBelow(_) = self.trigger {
            out.push(format!(
                "Increase recycling rate (currently {}%). Target: {}%",
                inputs.recycling_percent, RECYCLING_TARGET_PERCENT
            ));
        }
        out.extend(self.advice.iter().map(|line| line.to_string()));
    }
}

/// Every rule, in evaluation order.
pub const RULES: [ThresholdRule; 6] = [
    ThresholdRule {
        category: Category::Energy,
        trigger: Trigger::ElectricityBillAbove(1000.0),
        advice: &[
            "Install LED lighting throughout your facilities",
            "Implement motion sensors for lighting in less frequently used areas",
            "Consider solar panel installation for renewable energy generation",
            "Conduct an energy audit to identify major consumption areas",
        ],
    },
    ThresholdRule {
        category: Category::Energy,
        trigger: Trigger::NaturalGasBillAbove(500.0),
        advice: &[
            "Improve building insulation to reduce heating/cooling needs",
            "Install a smart thermostat system",
            "Regular maintenance of HVAC systems",
            "Consider heat pump technology for heating and cooling",
        ],
    },
    ThresholdRule {
        category: Category::Energy,
        trigger: Trigger::FuelBillAbove(800.0),
        advice: &[
            "Transition to electric or hybrid vehicles for company fleet",
            "Implement a vehicle maintenance schedule",
            "Install energy-efficient heating/cooling systems",
        ],
    },
    // The parameterized recycling-rate line is rendered ahead of these.
    ThresholdRule {
        category: Category::Waste,
        trigger: Trigger::RecyclingBelow(50),
        advice: &[
            "Implement a comprehensive recycling program",
            "Train employees on proper waste segregation",
            "Partner with recycling services for different waste streams",
        ],
    },
    ThresholdRule {
        category: Category::Waste,
        trigger: Trigger::WastePerMonthAbove(1000.0),
        advice: &[
            "Implement a paperless office policy",
            "Start a composting program for organic waste",
            "Set up double-sided printing as default",
            "Create a waste reduction awareness campaign",
        ],
    },
    ThresholdRule {
        category: Category::Travel,
        trigger: Trigger::TravelEmissionsAbove(1000.0),
        advice: &[
            "Promote virtual meetings over physical travel",
            "Implement a travel optimization system",
            "Consider carbon offsetting for necessary travel",
            "Develop a green travel policy",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_inputs() -> SuggestionInputs {
        SuggestionInputs {
            energy_kgco2: 0.0,
            waste_kgco2: 0.0,
            travel_kgco2: 0.0,
            electricity_bill: 0.0,
            natural_gas_bill: 0.0,
            fuel_bill: 0.0,
            waste_per_month: 0.0,
            recycling_percent: 50,
        }
    }

    #[test]
    fn test_limits_are_strict() {
        let inputs = SuggestionInputs {
            electricity_bill: 1000.0,
            natural_gas_bill: 500.0,
            fuel_bill: 800.0,
            waste_per_month: 1000.0,
            travel_kgco2: 1000.0,
            ..quiet_inputs()
        };
        assert!(RULES.iter().all(|rule| !rule.trigger.fires(&inputs)));
    }

    #[test]
    fn test_recycling_rule_renders_current_rate() {
        let inputs = SuggestionInputs {
            recycling_percent: 12,
            ..quiet_inputs()
        };
        let mut out = Vec::new();
        for rule in RULES.iter().filter(|r| r.category == Category::Waste) {
            rule.apply(&inputs, &mut out);
        }
        assert_eq!(out.len(), 4);
        assert_eq!(
            out.first().map(String::as_str),
            Some("Increase recycling rate (currently 12%). Target: 75%")
        );
    }

    #[test]
    fn test_rule_sizes() {
        let sizes: Vec<usize> = RULES
            .iter()
            .map(|rule| {
                let extra = usize::from(matches!(rule.trigger, Trigger::RecyclingBelow(_)));
                rule.advice.len() + extra
            })
            .collect();
        assert_eq!(sizes, [4, 4, 3, 4, 4, 4]);
    }
}
