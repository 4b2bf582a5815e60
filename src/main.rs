use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

use carbon_footprint::{
    Category, CategoryShare, CompanySize, EmissionBreakdown, ReportStore, SampleGenerator,
    StoreError, Submission, SuggestionSet, ValidationError, calculate, suggest,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "carbon-footprint")]
#[command(about = "Estimate company carbon emissions and suggest reductions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the annual footprint of one submission
    Calculate {
        /// Company name
        #[arg(long)]
        company: String,

        /// Report date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Monthly electricity bill in euros
        #[arg(long, default_value_t = 0.0)]
        electricity: f64,

        /// Monthly natural gas bill in euros
        #[arg(long, default_value_t = 0.0)]
        gas: f64,

        /// Monthly fuel bill in euros
        #[arg(long, default_value_t = 0.0)]
        fuel: f64,

        /// Waste generated per month in kg
        #[arg(long, default_value_t = 0.0)]
        waste: f64,

        /// Share of waste recycled, in percent
        #[arg(long, default_value_t = carbon_footprint::submission::DEFAULT_RECYCLING_PERCENT)]
        recycling: u8,

        /// Business travel distance in km
        #[arg(long, default_value_t = 0.0)]
        distance: f64,

        /// Average fuel consumption in L/100km
        #[arg(long, default_value_t = carbon_footprint::submission::DEFAULT_FUEL_EFFICIENCY)]
        efficiency: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate synthetic reports and write them as CSV
    Sample {
        /// Company size profile: small, medium or large
        #[arg(long, default_value = "medium")]
        size: CompanySize,

        /// Number of companies to generate
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// Company name prefix
        #[arg(long, default_value = "Company")]
        prefix: String,

        /// Seed for reproducible output
        #[arg(long, env = "CARBON_FOOTPRINT_SEED")]
        seed: Option<u64>,

        /// Report date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output CSV file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize a CSV export of reports
    Summary {
        /// CSV export to read
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// JSON output of the calculate command.
#[derive(Serialize)]
struct CalculateOutput<'a> {
    company_name: &'a str,
    report_date: NaiveDate,
    breakdown: EmissionBreakdown,
    rows: [CategoryShare; 3],
    suggestions: &'a SuggestionSet,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_breakdown(breakdown: &EmissionBreakdown) {
    println!("{:<16} {:>14} {:>8}", "Category", "kgCO2", "Share");
    for row in breakdown.rows() {
        println!(
            "{:<16} {:>14.2} {:>7.2}%",
            row.category.label(),
            row.kgco2,
            row.percent
        );
    }
    println!("{:<16} {:>14.2}", "Total", breakdown.total_kgco2());
}

fn print_suggestions(suggestions: &SuggestionSet) {
    println!("Priority actions");
    for (n, action) in suggestions.priority_actions.iter().enumerate() {
        println!("  {}. {}", n + 1, action);
    }
    for category in Category::ALL {
        println!();
        println!("{}", category.label());
        for line in suggestions.lines_or_fallback(category) {
            println!("  - {}", line);
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            company,
            date,
            electricity,
            gas,
            fuel,
            waste,
            recycling,
            distance,
            efficiency,
            json,
        } => {
            let submission = Submission::new(company, date.unwrap_or_else(today))
                .with_energy(electricity, gas, fuel)
                .with_waste(waste, recycling)
                .with_travel(distance, efficiency);

            let breakdown = match calculate(&submission) {
                Ok(breakdown) => breakdown,
                Err(err) => {
                    eprintln!("Invalid submission:");
                    for message in err.messages() {
                        eprintln!("  - {}", message);
                    }
                    std::process::exit(1);
                }
            };
            let suggestions = suggest(&breakdown, &submission);

            if json {
                let output = CalculateOutput {
                    company_name: &submission.company_name,
                    report_date: submission.report_date,
                    breakdown,
                    rows: breakdown.rows(),
                    suggestions: &suggestions,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!(
                    "Carbon footprint for {} ({})",
                    submission.company_name, submission.report_date
                );
                println!();
                print_breakdown(&breakdown);
                println!();
                print_suggestions(&suggestions);
            }
            Ok(())
        }
        Commands::Sample {
            size,
            count,
            prefix,
            seed,
            date,
            output,
        } => {
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut generator = SampleGenerator::new(rng);
            let store = ReportStore::new();

            for submission in generator.batch(&prefix, date.unwrap_or_else(today), size, count) {
                store.submit(&submission)?;
            }

            match output {
                Some(path) => {
                    store.write_csv(File::create(&path)?)?;
                    eprintln!(
                        "Wrote {} {} reports to {}",
                        store.len(),
                        size,
                        path.display()
                    );
                }
                None => {
                    let stdout = io::stdout();
                    let mut lock = stdout.lock();
                    store.write_csv(&mut lock)?;
                    lock.flush()?;
                }
            }
            Ok(())
        }
        Commands::Summary { input } => {
            let store = ReportStore::new();
            store.import_csv(File::open(&input)?)?;

            let summary = store.summary();
            println!("Companies:       {}", summary.company_count);
            println!("Reports:         {}", summary.report_count);
            println!("Total emissions: {:.2} kgCO2", summary.total_emissions);

            if !store.is_empty() {
                println!();
                println!(
                    "{:<24} {:>14} {:>14} {:>14}",
                    "Company", "Energy Usage", "Waste", "Business Travel"
                );
                for row in store.comparison() {
                    println!(
                        "{:<24} {:>14.2} {:>14.2} {:>14.2}",
                        row.company_name, row.energy_usage, row.waste, row.business_travel
                    );
                }
            }
            Ok(())
        }
    }
}
