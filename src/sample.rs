//! Synthetic submissions for demos and load testing.
//!
//! Each company size draws every figure uniformly from a fixed range
//! (lower bound inclusive, upper bound exclusive).

use std::ops::Range;
use std::str::FromStr;

use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

use crate::submission::Submission;

/// Size class of a synthetic company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

/// Typical monthly figures for one size class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeProfile {
    pub electricity_bill: Range<u32>,
    pub natural_gas_bill: Range<u32>,
    /// Monthly transport fuel spend.
    pub fuel_bill: Range<u32>,
    pub waste_per_month: Range<u32>,
    pub recycling_percent: Range<u8>,
    pub distance_km: Range<u32>,
    pub fuel_efficiency: Range<u32>,
}

impl CompanySize {
    pub const ALL: [CompanySize; 3] = [CompanySize::Small, CompanySize::Medium, CompanySize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
        }
    }

    /// Value ranges for this size class.
    pub fn profile(&self) -> SizeProfile {
        match self {
            CompanySize::Small => SizeProfile {
                electricity_bill: 500..1_000,
                natural_gas_bill: 10..100,
                fuel_bill: 500..1_500,
                waste_per_month: 100..500,
                recycling_percent: 20..40,
                distance_km: 10_000..50_000,
                fuel_efficiency: 5..7,
            },
            CompanySize::Medium => SizeProfile {
                electricity_bill: 2_000..5_000,
                natural_gas_bill: 500..2_000,
                fuel_bill: 2_000..5_000,
                waste_per_month: 500..2_000,
                recycling_percent: 30..50,
                distance_km: 50_000..100_000,
                fuel_efficiency: 7..9,
            },
            CompanySize::Large => SizeProfile {
                electricity_bill: 10_000..50_000,
                natural_gas_bill: 2_000..10_000,
                fuel_bill: 10_000..50_000,
                waste_per_month: 2_000..10_000,
                recycling_percent: 40..60,
                distance_km: 100_000..200_000,
                fuel_efficiency: 9..15,
            },
        }
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown company size.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Wrong company size: '{0}' (expected small, medium or large)")]
pub struct ParseCompanySizeError(pub String);

impl FromStr for CompanySize {
    type Err = ParseCompanySizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(CompanySize::Small),
            "medium" => Ok(CompanySize::Medium),
            "large" => Ok(CompanySize::Large),
            _ => Err(ParseCompanySizeError(s.to_string())),
        }
    }
}

/// Draws synthetic submissions from a random source.
pub struct SampleGenerator<R> {
    rng: R,
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A submission with every figure drawn from `size`'s profile.
    pub fn submission(
        &mut self,
        company_name: impl Into<String>,
        report_date: NaiveDate,
        size: CompanySize,
    ) -> Submission {
        let profile = size.profile();
        let rng = &mut self.rng;

        Submission::new(company_name, report_date)
            .with_energy(
                f64::from(rng.gen_range(profile.electricity_bill)),
                f64::from(rng.gen_range(profile.natural_gas_bill)),
                f64::from(rng.gen_range(profile.fuel_bill)),
            )
            .with_waste(
                f64::from(rng.gen_range(profile.waste_per_month)),
                rng.gen_range(profile.recycling_percent),
            )
            .with_travel(
                f64::from(rng.gen_range(profile.distance_km)),
                f64::from(rng.gen_range(profile.fuel_efficiency)),
            )
    }

    /// `count` submissions named "`prefix` 1" through "`prefix` `count`".
    pub fn batch(
        &mut self,
        prefix: &str,
        report_date: NaiveDate,
        size: CompanySize,
        count: usize,
    ) -> Vec<Submission> {
        (1..=count)
            .map(|n| self.submission(format!("{prefix} {n}"), report_date, size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::validate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    #[test]
    fn test_parse_size() {
        assert_eq!("small".parse::<CompanySize>(), Ok(CompanySize::Small));
        assert_eq!(" Medium ".parse::<CompanySize>(), Ok(CompanySize::Medium));
        assert_eq!("LARGE".parse::<CompanySize>(), Ok(CompanySize::Large));
        let err = "huge".parse::<CompanySize>().unwrap_err();
        assert!(err.to_string().starts_with("Wrong company size"));
    }

    #[test]
    fn test_samples_stay_in_profile_and_validate() {
        let mut generator = SampleGenerator::new(StdRng::seed_from_u64(7));
        for size in CompanySize::ALL {
            let profile = size.profile();
            for submission in generator.batch("Sample", date(), size, 50) {
                assert!(validate(&submission).is_valid(), "{submission:?}");
                let bill = submission.electricity_bill as u32;
                assert!(profile.electricity_bill.contains(&bill));
                assert!(profile.recycling_percent.contains(&submission.recycling_percent));
                let efficiency = submission.fuel_efficiency as u32;
                assert!(profile.fuel_efficiency.contains(&efficiency));
            }
        }
    }

    #[test]
    fn test_same_seed_same_samples() {
        let a = SampleGenerator::new(StdRng::seed_from_u64(42)).batch("Co", date(), CompanySize::Large, 3);
        let b = SampleGenerator::new(StdRng::seed_from_u64(42)).batch("Co", date(), CompanySize::Large, 3);
        assert_eq!(a, b);
        let names: Vec<&str> = a.iter().map(|s| s.company_name.as_str()).collect();
        assert_eq!(names, ["Co 1", "Co 2", "Co 3"]);
    }
}
