mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use immunostat::ImmunostatErr;
use immunostat::compute::types::{FeatureAnalysis, FrequencyRow, StatisticalTestResult};
use immunostat::compute::{analyze_cohort, frequency_table, load_records, test_significance};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

/// Logs go to stderr; RUST_LOG wins, otherwise warn (debug with --verbose)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One element of the JSON output: `result` on success, `error` otherwise
fn outcome_json(
    name: &str,
    label: &str,
    outcome: &Result<StatisticalTestResult, ImmunostatErr>,
) -> serde_json::Value {
    match outcome {
        Ok(result) => json!({ "population": name, "label": label, "result": result }),
        Err(e) => json!({ "population": name, "label": label, "error": e.to_string() }),
    }
}

fn format_outcome(label: &str, outcome: &Result<StatisticalTestResult, ImmunostatErr>) -> String {
    match outcome {
        Ok(result) => format!(
            "== {label}\np = {:.4} ({}), Cohen's d = {:.2}, rank-biserial r = {:.3}, n = {} vs {}\n{}\n",
            result.p_value,
            if result.is_significant {
                "significant"
            } else {
                "not significant"
            },
            result.effect_size.cohens_d,
            result.effect_size.rank_biserial_correlation,
            result.sample_sizes.responders,
            result.sample_sizes.non_responders,
            result.interpretation,
        ),
        Err(e) => format!("== {label}\nnot tested: {e}\n"),
    }
}

fn features_json(features: &[FeatureAnalysis]) -> serde_json::Value {
    features
        .iter()
        .map(|f| outcome_json(f.population.column(), f.label(), &f.outcome))
        .collect()
}

fn format_frequency_row(row: &FrequencyRow) -> String {
    format!(
        "{:<12} {:>10} {:<12} {:>8} {:>8.2}",
        row.sample,
        row.total_count,
        row.population.column(),
        row.count,
        row.percentage
    )
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Analyze(analyze) => {
            let records = load_records(&analyze.csv)
                .with_context(|| format!("reading {}", analyze.csv.display()))?;
            let analysis = analyze_cohort(&records, &analyze.filter());
            if analyze.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&features_json(&analysis.features))?
                );
            } else {
                println!(
                    "{} of {} records selected\n",
                    analysis.n_records,
                    records.len()
                );
                for feature in &analysis.features {
                    println!("{}", format_outcome(feature.label(), &feature.outcome));
                }
            }
        }
        Command::Test(test) => {
            let outcome = test_significance(&test.group_1, &test.group_2, &test.label);
            if test.json {
                let rows = json!([outcome_json(&test.label, &test.label, &outcome)]);
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", format_outcome(&test.label, &outcome));
            }
            outcome?;
        }
        Command::Overview(overview) => {
            let records = load_records(&overview.csv)
                .with_context(|| format!("reading {}", overview.csv.display()))?;
            let rows = frequency_table(&records);
            if overview.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!(
                    "{:<12} {:>10} {:<12} {:>8} {:>8}",
                    "sample", "total", "population", "count", "percent"
                );
                for row in &rows {
                    println!("{}", format_frequency_row(row));
                }
            }
        }
    }
    Ok(())
}
