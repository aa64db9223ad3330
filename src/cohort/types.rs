//----------------------------------------
// cohort mod types
//----------------------------------------
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cohort::error::CohortErr;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Healthy,
    Carcinoma,
    Melanoma,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize)]
pub enum Sex {
    M,
    F,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Treatment {
    Miraclib,
    Phauximab,
    #[serde(rename = "none")]
    Untreated,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Yes,
    No,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize)]
pub enum SampleType {
    #[serde(rename = "PBMC")]
    Pbmc,
    #[serde(rename = "WB")]
    Wb,
}

impl FromStr for Condition {
    type Err = CohortErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Condition::Healthy),
            "carcinoma" => Ok(Condition::Carcinoma),
            "melanoma" => Ok(Condition::Melanoma),
            _ => Err(CohortErr::UnknownValue {
                field: "condition",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Treatment {
    type Err = CohortErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miraclib" => Ok(Treatment::Miraclib),
            "phauximab" => Ok(Treatment::Phauximab),
            "none" => Ok(Treatment::Untreated),
            _ => Err(CohortErr::UnknownValue {
                field: "treatment",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for SampleType {
    type Err = CohortErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PBMC" => Ok(SampleType::Pbmc),
            "WB" => Ok(SampleType::Wb),
            _ => Err(CohortErr::UnknownValue {
                field: "sample type",
                value: s.to_string(),
            }),
        }
    }
}

/// One row of the cell-count table. Everything but the sample id may be
/// missing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrialRecord {
    pub sample: String,
    pub project: Option<String>,
    pub subject: Option<String>,
    pub condition: Option<Condition>,
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub treatment: Option<Treatment>,
    pub response: Option<Response>,
    pub sample_type: Option<SampleType>,
    pub time_from_treatment_start: Option<i64>,
    pub b_cell: Option<u64>,
    pub cd8_t_cell: Option<u64>,
    pub cd4_t_cell: Option<u64>,
    pub nk_cell: Option<u64>,
    pub monocyte: Option<u64>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellPopulation {
    BCell,
    Cd8TCell,
    Cd4TCell,
    NkCell,
    Monocyte,
}

impl CellPopulation {
    pub const ALL: [CellPopulation; 5] = [
        CellPopulation::BCell,
        CellPopulation::Cd8TCell,
        CellPopulation::Cd4TCell,
        CellPopulation::NkCell,
        CellPopulation::Monocyte,
    ];

    /// Column name in the cell-count table
    pub fn column(&self) -> &'static str {
        match self {
            CellPopulation::BCell => "b_cell",
            CellPopulation::Cd8TCell => "cd8_t_cell",
            CellPopulation::Cd4TCell => "cd4_t_cell",
            CellPopulation::NkCell => "nk_cell",
            CellPopulation::Monocyte => "monocyte",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CellPopulation::BCell => "B cell",
            CellPopulation::Cd8TCell => "CD8 T cell",
            CellPopulation::Cd4TCell => "CD4 T cell",
            CellPopulation::NkCell => "NK cell",
            CellPopulation::Monocyte => "Monocyte",
        }
    }

    pub fn count(&self, record: &TrialRecord) -> Option<u64> {
        match self {
            CellPopulation::BCell => record.b_cell,
            CellPopulation::Cd8TCell => record.cd8_t_cell,
            CellPopulation::Cd4TCell => record.cd4_t_cell,
            CellPopulation::NkCell => record.nk_cell,
            CellPopulation::Monocyte => record.monocyte,
        }
    }
}

impl TrialRecord {
    /// Missing counts add nothing
    pub fn total_cell_count(&self) -> u64 {
        CellPopulation::ALL
            .iter()
            .map(|p| p.count(self).unwrap_or(0))
            .sum()
    }

    /// Share of all counted cells, in percent; None when nothing was counted
    pub fn relative_frequency(&self, population: CellPopulation) -> Option<f64> {
        let total = self.total_cell_count();
        if total == 0 {
            return None;
        }
        let count = population.count(self).unwrap_or(0);
        Some(count as f64 / total as f64 * 100.0)
    }
}

/// Which records enter an analysis; unset criteria match anything. A record
/// always needs a known response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CohortFilter {
    pub sample_type: Option<SampleType>,
    pub condition: Option<Condition>,
    pub treatment: Option<Treatment>,
    pub time_from_treatment_start: Option<i64>,
}

impl Default for CohortFilter {
    fn default() -> Self {
        CohortFilter {
            sample_type: Some(SampleType::Pbmc),
            condition: Some(Condition::Melanoma),
            treatment: Some(Treatment::Miraclib),
            time_from_treatment_start: None,
        }
    }
}

impl CohortFilter {
    /// Default cohort restricted to samples taken at treatment start
    pub fn baseline() -> Self {
        CohortFilter {
            time_from_treatment_start: Some(0),
            ..CohortFilter::default()
        }
    }
}
