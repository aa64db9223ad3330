//----------------------------------------
// mann_whitney mod types
//----------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannWhitneyResult {
    // min(U1, U2)
    pub u_statistic: f64,
    // U for group 1, i.e. R1 - n1(n1 + 1)/2
    pub u1: f64,
    pub rank_sum_1: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub n_1: usize,
    pub n_2: usize,
}

impl MannWhitneyResult {
    pub fn u2(&self) -> f64 {
        (self.n_1 * self.n_2) as f64 - self.u1
    }
}
