use crate::effect_size::cohens_d::cohens_d;
use crate::effect_size::rank_biserial::{
    rank_biserial_correlation, signed_rank_biserial_correlation,
};
use crate::effect_size::types::{EffectMagnitude, EffectSizeResult};
use crate::error::ImmunostatErr;
use crate::mann_whitney::types::MannWhitneyResult;
use crate::mann_whitney::u_test::mann_whitney_u;

/// Effect sizes for groups whose U test has already been run
pub fn compute_effect_size(
    group_1: &[f64],
    group_2: &[f64],
    mw: &MannWhitneyResult,
) -> Result<EffectSizeResult, ImmunostatErr> {
    let cohens_d = cohens_d(group_1, group_2)?;
    Ok(EffectSizeResult {
        cohens_d,
        rank_biserial_correlation: rank_biserial_correlation(mw),
        signed_rank_biserial_correlation: signed_rank_biserial_correlation(mw),
        magnitude: EffectMagnitude::from_cohens_d(cohens_d),
    })
}

pub fn effect_size(group_1: &[f64], group_2: &[f64]) -> Result<EffectSizeResult, ImmunostatErr> {
    let mw = mann_whitney_u(group_1, group_2)?;
    compute_effect_size(group_1, group_2, &mw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_groups_large() {
        let effect = effect_size(&[1., 2., 3., 4., 5.], &[6., 7., 8., 9., 10.]).unwrap();
        assert_eq!(effect.magnitude, EffectMagnitude::Large);
        assert_eq!(effect.rank_biserial_correlation, 1.0);
        assert_eq!(effect.signed_rank_biserial_correlation, -1.0);
        assert!(effect.cohens_d >= 0.0);
    }

    #[test]
    fn overlapping_groups_small() {
        // Means 2.2 and 2.5, pooled sd ~1.21
        let effect = effect_size(&[1., 2., 3., 4., 1.], &[2., 3., 1., 4., 2.5]).unwrap();
        assert_eq!(effect.magnitude, EffectMagnitude::Small);
        assert!(effect.rank_biserial_correlation <= 1.0);
    }

    #[test]
    fn degenerate_groups_fail() {
        assert!(
            effect_size(&[1., 1., 1.], &[1., 1., 1.])
                .unwrap_err()
                .is_degenerate_input()
        );
    }
}
