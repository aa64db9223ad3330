//----------------------------------------
// Root lib
//----------------------------------------
//! Nonparametric comparison of two groups of measurements, built for immune
//! cell relative frequencies in treatment responders vs non-responders. Each
//! comparison runs a Mann-Whitney U test on tie-aware midranks, reports
//! Cohen's d and the rank-biserial correlation, and writes a short
//! interpretation of the result.

/// This module houses the public API for ranking, testing, effect sizes and
/// cohort analysis
pub mod compute;
/// This module contains error types
pub mod error;

mod cohort;
mod effect_size;
mod interpretation;
mod mann_whitney;
mod ranking;
mod significance;

pub use cohort::error::CohortErr;
pub use effect_size::error::DegenerateInputErr;
pub use error::ImmunostatErr;
pub use ranking::error::InvalidInputErr;
