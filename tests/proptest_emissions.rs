//! Property-based tests for the calculator, suggestion engine and report store.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use proptest::prelude::*;

use carbon_footprint::{
    EmissionBreakdown, ReportFields, ReportStore, Submission, calculate, energy_emissions,
    generate_suggestions, travel_emissions, validate, waste_emissions,
};

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default()
}

fn bill() -> impl Strategy<Value = f64> {
    0.0..100_000.0f64
}

// Raising any single bill never lowers energy emissions
proptest! {
    #[test]
    fn energy_is_monotonic(e in bill(), g in bill(), f in bill(), extra in bill()) {
        let base = energy_emissions(e, g, f);
        prop_assert!(energy_emissions(e + extra, g, f) >= base);
        prop_assert!(energy_emissions(e, g + extra, f) >= base);
        prop_assert!(energy_emissions(e, g, f + extra) >= base);
    }

    #[test]
    fn waste_without_volume_is_negative_percentage(p in 0u8..=100) {
        prop_assert_eq!(waste_emissions(0.0, p), -f64::from(p));
    }

    #[test]
    fn travel_without_distance_is_zero(eff in 0.1..50.0f64) {
        prop_assert_eq!(travel_emissions(0.0, eff), 0.0);
    }

    #[test]
    fn total_is_sum_of_categories(
        e in bill(), g in bill(), f in bill(),
        w in 0.1..10_000.0f64, p in 0u8..=100,
        d in 0.1..100_000.0f64, eff in 0.1..50.0f64,
    ) {
        let submission = Submission::new("Prop Co", report_date())
            .with_energy(e, g + 1.0, f)
            .with_waste(w, p)
            .with_travel(d, eff);
        let breakdown = calculate(&submission).unwrap();
        assert_relative_eq!(
            breakdown.total_kgco2(),
            breakdown.energy_kgco2() + breakdown.waste_kgco2() + breakdown.travel_kgco2()
        );
    }
}

// Validation collects every violated rule
proptest! {
    #[test]
    fn blank_name_and_zero_bills_always_report_both(name in "[ \t]{0,4}") {
        let submission = Submission::new(name, report_date())
            .with_waste(10.0, 30)
            .with_travel(10.0, 8.0);
        let validation = validate(&submission);
        prop_assert!(!validation.is_valid());
        prop_assert!(validation.messages().len() >= 2);
    }
}

// Suggestions are a pure function of their inputs
proptest! {
    #[test]
    fn suggestions_are_idempotent(
        energy in -1e6..1e6f64, waste in -1e6..1e6f64, travel in -1e6..1e6f64,
        e in bill(), g in bill(), f in bill(), w in bill(), p in 0u8..=100,
    ) {
        let first = generate_suggestions(energy, waste, travel, e, g, f, w, p);
        let second = generate_suggestions(energy, waste, travel, e, g, f, w, p);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.priority_actions.len(), 3);
        prop_assert!(first.priority_actions[0].starts_with("Focus on "));
        prop_assert!(first.priority_actions[1].starts_with("Secondary focus on "));
        prop_assert!(first.priority_actions[2].starts_with("Monitor "));
    }
}

// Store counts follow appends
proptest! {
    #[test]
    fn store_counts_after_appends(companies in prop::collection::vec(0usize..5, 0..40)) {
        let store = ReportStore::new();
        let mut expected_total = 0.0;
        for company in &companies {
            let report = store.record(ReportFields {
                company_name: format!("Company {}", company),
                date: report_date(),
                breakdown: EmissionBreakdown::new(100.0, 10.0, 1.0),
            });
            expected_total += report.total;
        }

        let mut distinct = companies.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let summary = store.summary();
        prop_assert_eq!(summary.report_count, companies.len());
        prop_assert_eq!(summary.company_count, distinct.len());
        prop_assert_eq!(store.comparison().len(), companies.len());
        assert_relative_eq!(summary.total_emissions, expected_total);
    }

    #[test]
    fn csv_import_reproduces_summary(count in 0usize..20) {
        let store = ReportStore::new();
        for n in 0..count {
            let value = n as f64;
            store.record(ReportFields {
                company_name: format!("Company {}", n % 3),
                date: report_date(),
                breakdown: EmissionBreakdown::new(value * 1.5, value - 30.0, value / 7.0),
            });
        }

        let csv = store.export_csv().unwrap();
        let imported = ReportStore::new();
        prop_assert_eq!(imported.import_csv(csv.as_bytes()).unwrap(), count);
        prop_assert_eq!(imported.reports(), store.reports());
        prop_assert_eq!(imported.summary(), store.summary());
    }
}
