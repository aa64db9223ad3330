//! CLI argument parsing for immunostat

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use immunostat::compute::types::{CohortFilter, Condition, SampleType, Treatment};

#[derive(Parser, Debug)]
#[command(name = "immunostat")]
#[command(version)]
#[command(about = "Responder vs non-responder significance testing for immune cell frequencies", long_about = None)]
pub struct Cli {
    /// Log debug events to stderr (RUST_LOG still applies)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Test every cell population in a cell-count CSV
    Analyze(AnalyzeArgs),
    /// Test two ad-hoc groups of values
    Test(TestArgs),
    /// Per-sample relative frequency of each population
    Overview(OverviewArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Cell-count CSV with a header row
    pub csv: PathBuf,

    /// PBMC or WB
    #[arg(long, default_value = "PBMC", conflicts_with = "any_sample_type")]
    pub sample_type: SampleType,

    /// healthy, carcinoma or melanoma
    #[arg(long, default_value = "melanoma", conflicts_with = "any_condition")]
    pub condition: Condition,

    /// miraclib, phauximab or none
    #[arg(long, default_value = "miraclib", conflicts_with = "any_treatment")]
    pub treatment: Treatment,

    /// Do not filter on sample type
    #[arg(long)]
    pub any_sample_type: bool,

    /// Do not filter on condition
    #[arg(long)]
    pub any_condition: bool,

    /// Do not filter on treatment
    #[arg(long)]
    pub any_treatment: bool,

    /// Only samples taken at treatment start (time_from_treatment_start = 0)
    #[arg(long)]
    pub baseline: bool,

    /// Print a JSON array, one object per population
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    pub fn filter(&self) -> CohortFilter {
        CohortFilter {
            sample_type: (!self.any_sample_type).then_some(self.sample_type),
            condition: (!self.any_condition).then_some(self.condition),
            treatment: (!self.any_treatment).then_some(self.treatment),
            time_from_treatment_start: self.baseline.then_some(0),
        }
    }
}

#[derive(Args, Debug)]
pub struct TestArgs {
    /// Responder values, comma separated
    #[arg(long = "group1", value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    pub group_1: Vec<f64>,

    /// Non-responder values, comma separated
    #[arg(long = "group2", value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    pub group_2: Vec<f64>,

    /// Name used in the interpretation
    #[arg(long, default_value = "feature")]
    pub label: String,

    /// Print a one-element JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// Cell-count CSV with a header row
    pub csv: PathBuf,

    /// Print a JSON array, one object per row
    #[arg(long)]
    pub json: bool,
}
