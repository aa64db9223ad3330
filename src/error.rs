//----------------------------------------
// Crate error type
//----------------------------------------
use crate::cohort::error::CohortErr;
use crate::effect_size::error::DegenerateInputErr;
use crate::ranking::error::InvalidInputErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImmunostatErr {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInputErr),
    #[error("degenerate input: {0}")]
    DegenerateInput(DegenerateInputErr),
    #[error("while loading cohort: {0}")]
    Cohort(CohortErr),
}

impl ImmunostatErr {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ImmunostatErr::InvalidInput(_))
    }

    pub fn is_degenerate_input(&self) -> bool {
        matches!(self, ImmunostatErr::DegenerateInput(_))
    }
}
