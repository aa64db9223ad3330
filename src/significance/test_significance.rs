use tracing::debug;

use crate::effect_size::compute_effect_size::compute_effect_size;
use crate::error::ImmunostatErr;
use crate::interpretation::compose::compose_interpretation;
use crate::interpretation::types::is_significant;
use crate::mann_whitney::u_test::mann_whitney_u;
use crate::ranking::error::{check_finite, check_non_empty};
use crate::significance::types::{SampleSizes, StatisticalTestResult};

/// Compares one feature between responders and non-responders: U test,
/// effect sizes, then the written interpretation. Any failure returns the
/// error alone; there is no partial result.
pub fn test_significance(
    responders: &[f64],
    non_responders: &[f64],
    label: &str,
) -> Result<StatisticalTestResult, ImmunostatErr> {
    //----------------------------------------
    // Check arguments
    check_non_empty(responders, non_responders)?;
    check_finite(responders, non_responders)?;

    //----------------------------------------
    // Test, effect size, interpretation
    let mw = mann_whitney_u(responders, non_responders)?;
    let effect_size = compute_effect_size(responders, non_responders, &mw)?;
    let interpretation = compose_interpretation(mw.p_value, &effect_size, label);

    debug!(
        label,
        p = mw.p_value,
        d = effect_size.cohens_d,
        magnitude = %effect_size.magnitude,
        "significance test"
    );

    Ok(StatisticalTestResult {
        p_value: mw.p_value,
        is_significant: is_significant(mw.p_value),
        effect_size,
        interpretation,
        sample_sizes: SampleSizes {
            responders: responders.len(),
            non_responders: non_responders.len(),
        },
    })
}
