//----------------------------------------
// effect_size mod types
//----------------------------------------
use std::fmt;

use serde::Serialize;

// Cohen (1988) conventions; each bin includes its lower bound
pub const SMALL_EFFECT_D: f64 = 0.2;
pub const MEDIUM_EFFECT_D: f64 = 0.5;
pub const LARGE_EFFECT_D: f64 = 0.8;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectMagnitude {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectMagnitude {
    pub fn from_cohens_d(d: f64) -> Self {
        if d < SMALL_EFFECT_D {
            EffectMagnitude::Negligible
        } else if d < MEDIUM_EFFECT_D {
            EffectMagnitude::Small
        } else if d < LARGE_EFFECT_D {
            EffectMagnitude::Medium
        } else {
            EffectMagnitude::Large
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectMagnitude::Negligible => "negligible",
            EffectMagnitude::Small => "small",
            EffectMagnitude::Medium => "medium",
            EffectMagnitude::Large => "large",
        }
    }
}

impl fmt::Display for EffectMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSizeResult {
    pub cohens_d: f64,
    // |r|, in [0, 1]
    pub rank_biserial_correlation: f64,
    // Positive when group 1 tends to be larger
    pub signed_rank_biserial_correlation: f64,
    #[serde(rename = "interpretation")]
    pub magnitude: EffectMagnitude,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_bins_lower_inclusive() {
        assert_eq!(EffectMagnitude::from_cohens_d(0.0), EffectMagnitude::Negligible);
        assert_eq!(EffectMagnitude::from_cohens_d(0.19999), EffectMagnitude::Negligible);
        assert_eq!(EffectMagnitude::from_cohens_d(0.2), EffectMagnitude::Small);
        assert_eq!(EffectMagnitude::from_cohens_d(0.49999), EffectMagnitude::Small);
        assert_eq!(EffectMagnitude::from_cohens_d(0.5), EffectMagnitude::Medium);
        assert_eq!(EffectMagnitude::from_cohens_d(0.79999), EffectMagnitude::Medium);
        assert_eq!(EffectMagnitude::from_cohens_d(0.8), EffectMagnitude::Large);
        assert_eq!(EffectMagnitude::from_cohens_d(12.0), EffectMagnitude::Large);
    }

    #[test]
    fn magnitude_serializes_lowercase() {
        let json = serde_json::to_string(&EffectMagnitude::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        assert_eq!(format!("{}", EffectMagnitude::Negligible), "negligible");
    }

    #[test]
    fn effect_size_json_keys() {
        let effect = EffectSizeResult {
            cohens_d: 1.5,
            rank_biserial_correlation: 1.0,
            signed_rank_biserial_correlation: -1.0,
            magnitude: EffectMagnitude::Large,
        };
        let value = serde_json::to_value(effect).unwrap();
        assert_eq!(value["cohensD"], 1.5);
        assert_eq!(value["rankBiserialCorrelation"], 1.0);
        assert_eq!(value["signedRankBiserialCorrelation"], -1.0);
        assert_eq!(value["interpretation"], "large");
    }
}
