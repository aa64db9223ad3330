//----------------------------------------
// Standard normal CDF
//----------------------------------------
// Abramowitz and Stegun 7.1.26; |error| in erf below 1.5e-7. Kept instead of
// a library CDF so p-values match other implementations of this test digit
// for digit.
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// erf(x) for x >= 0
fn erf_nonneg(x: f64) -> f64 {
    let t = 1.0 / (1.0 + P * x);
    1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp()
}

pub fn std_normal_cdf(z: f64) -> f64 {
    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    let x = z.abs() / std::f64::consts::SQRT_2;
    0.5 * (1.0 + sign * erf_nonneg(x))
}

/// P(|Z| >= |z|)
pub fn two_tailed_p_value(z: f64) -> f64 {
    2.0 * (1.0 - std_normal_cdf(z))
}
