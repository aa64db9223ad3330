use rayon::prelude::*;
use tracing::{info, warn};

use crate::cohort::filter::split_by_response;
use crate::cohort::types::{CellPopulation, CohortFilter, TrialRecord};
use crate::error::ImmunostatErr;
use crate::significance::test_significance::test_significance;
use crate::significance::types::StatisticalTestResult;

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureAnalysis {
    pub population: CellPopulation,
    pub outcome: Result<StatisticalTestResult, ImmunostatErr>,
}

impl FeatureAnalysis {
    pub fn label(&self) -> &'static str {
        self.population.label()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CohortAnalysis {
    // Records left after filtering
    pub n_records: usize,
    // One entry per population, in CellPopulation::ALL order
    pub features: Vec<FeatureAnalysis>,
}

/// Runs one responder vs non-responder test per cell population. Features
/// are independent: each carries its own outcome and a failure in one does
/// not stop the others.
pub fn analyze_cohort(records: &[TrialRecord], filter: &CohortFilter) -> CohortAnalysis {
    let selected = filter.apply(records);
    info!(
        total = records.len(),
        selected = selected.len(),
        "cohort selected"
    );

    let features = CellPopulation::ALL
        .par_iter()
        .map(|&population| {
            let (responders, non_responders) =
                split_by_response(selected.iter().copied(), population);
            let outcome = test_significance(&responders, &non_responders, population.label());
            if let Err(e) = &outcome {
                warn!(population = population.label(), error = %e, "feature test failed");
            }
            FeatureAnalysis {
                population,
                outcome,
            }
        })
        .collect();

    CohortAnalysis {
        n_records: selected.len(),
        features,
    }
}
