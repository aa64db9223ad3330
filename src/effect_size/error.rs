//----------------------------------------
// effect size errors
//----------------------------------------
use crate::error::ImmunostatErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DegenerateInputErr {
    #[error(
        "pooled variance needs more than 2 observations across both groups; got {0}"
    )]
    InsufficientObservations(usize),
    #[error("pooled standard deviation is zero; Cohen's d is undefined")]
    ZeroPooledVariance,
}

impl Into<ImmunostatErr> for DegenerateInputErr {
    fn into(self) -> ImmunostatErr {
        ImmunostatErr::DegenerateInput(self)
    }
}
