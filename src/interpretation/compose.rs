use crate::effect_size::types::EffectSizeResult;
use crate::interpretation::types::{BiologicalSignificance, is_significant};

/// Plain-language summary of one responder vs non-responder comparison:
/// significance at alpha = 0.05, the effect size, then the biological
/// reading of the two together.
pub fn compose_interpretation(p_value: f64, effect: &EffectSizeResult, label: &str) -> String {
    let significance = if is_significant(p_value) {
        "There is a statistically significant difference"
    } else {
        "There is no statistically significant difference"
    };
    let biological = BiologicalSignificance::classify(p_value, effect.cohens_d);

    format!(
        "{significance} in {label} frequencies between responders and non-responders \
        (p = {p_value:.4}). The effect size is {magnitude} (rank-biserial correlation = \
        {r:.3}; Cohen's D = {d:.2}), {clause}",
        magnitude = effect.magnitude,
        r = effect.rank_biserial_correlation,
        d = effect.cohens_d,
        clause = biological.clause(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect_size::types::EffectMagnitude;

    fn effect(cohens_d: f64, r: f64) -> EffectSizeResult {
        EffectSizeResult {
            cohens_d,
            rank_biserial_correlation: r,
            signed_rank_biserial_correlation: r,
            magnitude: EffectMagnitude::from_cohens_d(cohens_d),
        }
    }

    #[test]
    fn significant_large_effect() {
        let text = compose_interpretation(0.0001, &effect(0.9, 0.84), "B cell");
        assert_eq!(
            text,
            "There is a statistically significant difference in B cell frequencies between \
            responders and non-responders (p = 0.0001). The effect size is large \
            (rank-biserial correlation = 0.840; Cohen's D = 0.90), suggesting a meaningful \
            biological difference that warrants further investigation."
        );
    }

    #[test]
    fn significant_small_effect() {
        let text = compose_interpretation(0.012345, &effect(0.3, 0.2), "NK cell");
        assert!(text.starts_with("There is a statistically significant difference in NK cell"));
        assert!(text.contains("(p = 0.0123)"));
        assert!(text.contains("The effect size is small"));
        assert!(text.ends_with(
            "but the biological significance may be limited due to the small effect size."
        ));
    }

    #[test]
    fn not_significant_ignores_effect() {
        let text = compose_interpretation(0.4, &effect(1.2, 0.5), "Monocyte");
        assert!(text.starts_with("There is no statistically significant difference"));
        assert!(text.contains("Cohen's D = 1.20"));
        assert!(text.ends_with("likely due to random variation."));
    }
}
