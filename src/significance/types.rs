//----------------------------------------
// significance mod types
//----------------------------------------
use serde::Serialize;

use crate::effect_size::types::EffectSizeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSizes {
    pub responders: usize,
    pub non_responders: usize,
}

/// Outcome of one responder vs non-responder comparison. Built once per call
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticalTestResult {
    pub p_value: f64,
    pub is_significant: bool,
    pub effect_size: EffectSizeResult,
    pub interpretation: String,
    pub sample_sizes: SampleSizes,
}
