//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::cohort::analyze::{CohortAnalysis, FeatureAnalysis};
pub use crate::cohort::overview::FrequencyRow;
pub use crate::cohort::types::{
    CellPopulation, CohortFilter, Condition, Response, SampleType, Sex, Treatment, TrialRecord,
};
pub use crate::effect_size::types::{EffectMagnitude, EffectSizeResult};
pub use crate::interpretation::types::{ALPHA, BiologicalSignificance};
pub use crate::mann_whitney::types::MannWhitneyResult;
pub use crate::ranking::types::{RankAssignment, RankedObservation, SampleGroup};
pub use crate::significance::types::{SampleSizes, StatisticalTestResult};
