//----------------------------------------
// cohort errors
//----------------------------------------
use crate::error::ImmunostatErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CohortErr {
    #[error("could not open {path}: {message}")]
    Io { path: String, message: String },
    #[error("bad record at line {line}: {message}")]
    Csv { line: u64, message: String },
    #[error("{0} contains no records")]
    NoRecords(String),
    #[error("unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

impl Into<ImmunostatErr> for CohortErr {
    fn into(self) -> ImmunostatErr {
        ImmunostatErr::Cohort(self)
    }
}
