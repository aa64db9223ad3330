use crate::mann_whitney::types::MannWhitneyResult;

/// |2U / (n1 n2) - 1| with U = min(U1, U2)
pub fn rank_biserial_correlation(mw: &MannWhitneyResult) -> f64 {
    let n_pairs = (mw.n_1 * mw.n_2) as f64;
    (2.0 * mw.u_statistic / n_pairs - 1.0).abs()
}

/// (U1 - U2) / (n1 n2); same magnitude as above, sign gives direction
pub fn signed_rank_biserial_correlation(mw: &MannWhitneyResult) -> f64 {
    let n_pairs = (mw.n_1 * mw.n_2) as f64;
    (mw.u1 - mw.u2()) / n_pairs
}
