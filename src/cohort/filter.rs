use itertools::{Either, Itertools};

use crate::cohort::types::{CellPopulation, CohortFilter, Response, TrialRecord};

impl CohortFilter {
    pub fn matches(&self, record: &TrialRecord) -> bool {
        fn accepts<T: PartialEq>(wanted: Option<T>, actual: Option<T>) -> bool {
            wanted.is_none() || wanted == actual
        }
        record.response.is_some()
            && accepts(self.sample_type, record.sample_type)
            && accepts(self.condition, record.condition)
            && accepts(self.treatment, record.treatment)
            && accepts(
                self.time_from_treatment_start,
                record.time_from_treatment_start,
            )
    }

    pub fn apply<'a>(&self, records: &'a [TrialRecord]) -> Vec<&'a TrialRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Relative frequencies of one population, split into (responders,
/// non-responders). Records without a response or without any counted cells
/// are left out.
pub fn split_by_response<'a, I>(records: I, population: CellPopulation) -> (Vec<f64>, Vec<f64>)
where
    I: IntoIterator<Item = &'a TrialRecord>,
{
    records
        .into_iter()
        .filter_map(|r| Some((r.response?, r.relative_frequency(population)?)))
        .partition_map(|(response, freq)| match response {
            Response::Yes => Either::Left(freq),
            Response::No => Either::Right(freq),
        })
}
