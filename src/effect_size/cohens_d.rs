use crate::effect_size::error::DegenerateInputErr;
use crate::error::ImmunostatErr;
use crate::ranking::error::check_non_empty;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sum_of_squares(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

/// Unbiased pooled standard deviation with n1 + n2 - 2 degrees of freedom.
/// Built from the raw sums of squares so a group of one contributes zero
/// rather than 0 * (0 / 0).
pub fn pooled_sd(group_1: &[f64], group_2: &[f64]) -> Result<f64, ImmunostatErr> {
    check_non_empty(group_1, group_2)?;
    let n_total = group_1.len() + group_2.len();
    if n_total <= 2 {
        return Err(DegenerateInputErr::InsufficientObservations(n_total).into());
    }

    let ss_1 = sum_of_squares(group_1, mean(group_1));
    let ss_2 = sum_of_squares(group_2, mean(group_2));
    Ok(((ss_1 + ss_2) / (n_total - 2) as f64).sqrt())
}

/// |mean1 - mean2| / pooled SD
pub fn cohens_d(group_1: &[f64], group_2: &[f64]) -> Result<f64, ImmunostatErr> {
    let sd = pooled_sd(group_1, group_2)?;
    if sd == 0.0 {
        return Err(DegenerateInputErr::ZeroPooledVariance.into());
    }
    Ok((mean(group_1) - mean(group_2)).abs() / sd)
}
