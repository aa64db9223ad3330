use serde::Serialize;

use crate::cohort::types::{CellPopulation, TrialRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyRow {
    pub sample: String,
    pub total_count: u64,
    pub population: CellPopulation,
    pub count: u64,
    // Percent of total_count, rounded to 2 decimals
    pub percentage: f64,
}

fn round_2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// One row per sample and population with a non-zero count. Samples with no
/// counted cells contribute nothing.
pub fn frequency_table(records: &[TrialRecord]) -> Vec<FrequencyRow> {
    records
        .iter()
        .flat_map(|record| {
            CellPopulation::ALL.into_iter().filter_map(move |population| {
                let count = population.count(record).filter(|&c| c > 0)?;
                let percentage = record.relative_frequency(population)?;
                Some(FrequencyRow {
                    sample: record.sample.clone(),
                    total_count: record.total_cell_count(),
                    population,
                    count,
                    percentage: round_2(percentage),
                })
            })
        })
        .collect()
}
