//----------------------------------------
// interpretation mod types
//----------------------------------------
use crate::effect_size::types::MEDIUM_EFFECT_D;

/// Two-tailed significance level
pub const ALPHA: f64 = 0.05;

pub fn is_significant(p_value: f64) -> bool {
    p_value < ALPHA
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BiologicalSignificance {
    // significant, d >= 0.5
    Meaningful,
    // significant, d < 0.5
    Limited,
    // not significant, any d
    RandomVariation,
}

impl BiologicalSignificance {
    pub fn classify(p_value: f64, cohens_d: f64) -> Self {
        match (is_significant(p_value), cohens_d >= MEDIUM_EFFECT_D) {
            (true, true) => BiologicalSignificance::Meaningful,
            (true, false) => BiologicalSignificance::Limited,
            (false, _) => BiologicalSignificance::RandomVariation,
        }
    }

    pub fn clause(&self) -> &'static str {
        match self {
            BiologicalSignificance::Meaningful => {
                "suggesting a meaningful biological difference that warrants further investigation."
            }
            BiologicalSignificance::Limited => {
                "but the biological significance may be limited due to the small effect size."
            }
            BiologicalSignificance::RandomVariation => {
                "indicating that any observed differences are likely due to random variation."
            }
        }
    }
}
