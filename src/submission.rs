//! Company submissions and their validation.
//!
//! Validation never stops at the first problem: every rule is evaluated and
//! each violated rule contributes its message, in rule order, so a caller can
//! show all problems at once.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::debug;

/// Recycling percentage preset when a form leaves it untouched.
pub const DEFAULT_RECYCLING_PERCENT: u8 = 30;

/// Fuel efficiency (L/100km) preset when a form leaves it untouched.
pub const DEFAULT_FUEL_EFFICIENCY: f64 = 8.0;

pub const MSG_COMPANY_NAME: &str = "Please enter a company name.";
pub const MSG_ENERGY_USAGE: &str = "Please enter at least one energy usage value.";
pub const MSG_WASTE: &str = "Please enter the amount of waste generated.";
pub const MSG_DISTANCE: &str = "Please enter the distance traveled.";
pub const MSG_FUEL_EFFICIENCY: &str = "Please enter a valid fuel efficiency value greater than 0.";
pub const MSG_NEGATIVE_ENERGY: &str = "Energy usage values must be non-negative numbers.";
pub const MSG_NEGATIVE_WASTE: &str = "Waste generated must be a non-negative number.";
pub const MSG_RECYCLING_RANGE: &str = "Recycling percentage must be between 0 and 100.";
pub const MSG_NEGATIVE_DISTANCE: &str = "Distance traveled must be a non-negative number.";
pub const MSG_NON_FINITE_EFFICIENCY: &str = "Fuel efficiency must be a finite number.";

/// Self-reported figures for one company and reporting date.
///
/// Fields missing from a deserialized submission take the form defaults:
/// zero figures, 30% recycling, 8 L/100km and today's date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub company_name: String,
    pub report_date: NaiveDate,
    /// Monthly electricity bill in euros.
    pub electricity_bill: f64,
    /// Monthly natural gas bill in euros.
    pub natural_gas_bill: f64,
    /// Monthly fuel bill in euros.
    pub fuel_bill: f64,
    /// Waste generated per month in kg.
    pub waste_per_month: f64,
    pub recycling_percent: u8,
    /// Business travel distance in km.
    pub distance_km: f64,
    /// Average fuel consumption in L/100km.
    pub fuel_efficiency: f64,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            report_date: Local::now().date_naive(),
            electricity_bill: 0.0,
            natural_gas_bill: 0.0,
            fuel_bill: 0.0,
            waste_per_month: 0.0,
            recycling_percent: DEFAULT_RECYCLING_PERCENT,
            distance_km: 0.0,
            fuel_efficiency: DEFAULT_FUEL_EFFICIENCY,
        }
    }
}

impl Submission {
    /// Start a submission for `company_name` on `report_date` with form defaults.
    pub fn new(company_name: impl Into<String>, report_date: NaiveDate) -> Self {
        Self {
            company_name: company_name.into(),
            report_date,
            ..Self::default()
        }
    }

    /// Set the three monthly energy bills.
    pub fn with_energy(mut self, electricity_bill: f64, natural_gas_bill: f64, fuel_bill: f64) -> Self {
        self.electricity_bill = electricity_bill;
        self.natural_gas_bill = natural_gas_bill;
        self.fuel_bill = fuel_bill;
        self
    }

    /// Set monthly waste and the recycled share.
    pub fn with_waste(mut self, waste_per_month: f64, recycling_percent: u8) -> Self {
        self.waste_per_month = waste_per_month;
        self.recycling_percent = recycling_percent;
        self
    }

    /// Set travel distance and fuel efficiency.
    pub fn with_travel(mut self, distance_km: f64, fuel_efficiency: f64) -> Self {
        self.distance_km = distance_km;
        self.fuel_efficiency = fuel_efficiency;
        self
    }
}

/// Outcome of validating a [`Submission`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    messages: Vec<String>,
}

impl Validation {
    /// True when no rule fired.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages of every violated rule, in rule order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Convert into a `Result`, carrying all messages on failure.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError {
                messages: self.messages,
            })
        }
    }

    fn check(&mut self, violated: bool, message: &str) {
        if violated {
            self.messages.push(message.to_string());
        }
    }
}

/// A submission failed one or more validation rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid submission: {}", .messages.join(" "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// Every violated rule's message, in rule order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Evaluate every validation rule against `submission`.
///
/// The zero checks compare for exact equality: a tiny positive waste amount
/// is accepted, and only all three energy bills being zero together is
/// rejected.
pub fn validate(submission: &Submission) -> Validation {
    let mut validation = Validation::default();

    validation.check(submission.company_name.trim().is_empty(), MSG_COMPANY_NAME);
    validation.check(
        submission.electricity_bill == 0.0
            && submission.natural_gas_bill == 0.0
            && submission.fuel_bill == 0.0,
        MSG_ENERGY_USAGE,
    );
    validation.check(submission.waste_per_month == 0.0, MSG_WASTE);
    validation.check(submission.distance_km == 0.0, MSG_DISTANCE);
    validation.check(submission.fuel_efficiency <= 0.0, MSG_FUEL_EFFICIENCY);

    // Ranges a form widget would otherwise have enforced.
    validation.check(
        ![
            submission.electricity_bill,
            submission.natural_gas_bill,
            submission.fuel_bill,
        ]
        .into_iter()
        .all(is_non_negative),
        MSG_NEGATIVE_ENERGY,
    );
    validation.check(!is_non_negative(submission.waste_per_month), MSG_NEGATIVE_WASTE);
    validation.check(submission.recycling_percent > 100, MSG_RECYCLING_RANGE);
    validation.check(!is_non_negative(submission.distance_km), MSG_NEGATIVE_DISTANCE);
    validation.check(!submission.fuel_efficiency.is_finite(), MSG_NON_FINITE_EFFICIENCY);

    if !validation.is_valid() {
        debug!(
            company = %submission.company_name,
            failures = validation.messages.len(),
            "submission rejected"
        );
    }

    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> Submission {
        Submission::new("Acme", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .with_energy(1000.0, 500.0, 800.0)
            .with_waste(1000.0, 30)
            .with_travel(100.0, 8.0)
    }

    #[test]
    fn test_valid_submission_passes() {
        let validation = validate(&valid_submission());
        assert!(validation.is_valid());
        assert!(validation.messages().is_empty());
        assert!(validation.into_result().is_ok());
    }

    #[test]
    fn test_collects_every_message() {
        let submission = Submission {
            company_name: String::new(),
            ..valid_submission().with_energy(0.0, 0.0, 0.0)
        };
        let validation = validate(&submission);
        assert!(!validation.is_valid());
        assert_eq!(validation.messages(), [MSG_COMPANY_NAME, MSG_ENERGY_USAGE]);
    }

    #[test]
    fn test_required_field_rules_fire_in_order() {
        let submission = Submission {
            company_name: "   ".into(),
            ..Submission::default().with_travel(0.0, 0.0)
        };
        let messages = validate(&submission).into_result().unwrap_err().into_messages();
        assert_eq!(
            messages,
            [MSG_COMPANY_NAME, MSG_ENERGY_USAGE, MSG_WASTE, MSG_DISTANCE, MSG_FUEL_EFFICIENCY]
        );
    }

    #[test]
    fn test_single_energy_bill_is_enough() {
        for (e, g, f) in [(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)] {
            let submission = valid_submission().with_energy(e, g, f);
            assert!(validate(&submission).is_valid(), "bills {e} {g} {f}");
        }
    }

    #[test]
    fn test_zero_checks_are_exact() {
        let submission = valid_submission()
            .with_waste(f64::MIN_POSITIVE, 30)
            .with_travel(f64::MIN_POSITIVE, 8.0);
        assert!(validate(&submission).is_valid());
    }

    #[test]
    fn test_negative_efficiency_reports_once() {
        let submission = valid_submission().with_travel(100.0, -2.0);
        assert_eq!(validate(&submission).messages(), [MSG_FUEL_EFFICIENCY]);
    }

    #[test]
    fn test_range_rules() {
        let submission = valid_submission()
            .with_energy(-1.0, 0.0, 0.0)
            .with_waste(-5.0, 101)
            .with_travel(-10.0, f64::NAN);
        assert_eq!(
            validate(&submission).messages(),
            [
                MSG_NEGATIVE_ENERGY,
                MSG_NEGATIVE_WASTE,
                MSG_RECYCLING_RANGE,
                MSG_NEGATIVE_DISTANCE,
                MSG_NON_FINITE_EFFICIENCY,
            ]
        );
    }

    #[test]
    fn test_error_display_lists_messages() {
        let err = validate(&Submission::default()).into_result().unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("invalid submission: "));
        assert!(text.contains(MSG_COMPANY_NAME));
        assert!(text.contains(MSG_DISTANCE));
    }

    #[test]
    fn test_deserialize_applies_form_defaults() {
        let submission: Submission = serde_json::from_str(
            r#"{"company_name": "Acme", "report_date": "2024-03-01", "electricity_bill": 10.0}"#,
        )
        .unwrap();
        assert_eq!(submission.recycling_percent, DEFAULT_RECYCLING_PERCENT);
        assert_eq!(submission.fuel_efficiency, DEFAULT_FUEL_EFFICIENCY);
        assert_eq!(submission.report_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
