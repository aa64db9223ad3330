//----------------------------------------
// ranking mod types
//----------------------------------------
use std::fmt;

/// Which of the two compared samples an observation came from
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SampleGroup {
    First,
    Second,
}

impl fmt::Display for SampleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleGroup::First => write!(f, "group 1"),
            SampleGroup::Second => write!(f, "group 2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedObservation {
    pub value: f64,
    pub group: SampleGroup,
    // Position within its originating group
    pub index: usize,
    pub rank: f64,
}

/// Pooled observations sorted ascending, each carrying its midrank
#[derive(Debug, Clone, PartialEq)]
pub struct RankAssignment {
    pub(crate) observations: Vec<RankedObservation>,
    pub(crate) n_1: usize,
    pub(crate) n_2: usize,
}

impl RankAssignment {
    pub fn observations(&self) -> &[RankedObservation] {
        &self.observations
    }

    pub fn n_1(&self) -> usize {
        self.n_1
    }

    pub fn n_2(&self) -> usize {
        self.n_2
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Ranks of one group, in that group's original order
    pub fn ranks_for(&self, group: SampleGroup) -> Vec<f64> {
        let n = match group {
            SampleGroup::First => self.n_1,
            SampleGroup::Second => self.n_2,
        };
        let mut ranks = vec![0.0; n];
        for obs in self.observations.iter().filter(|o| o.group == group) {
            ranks[obs.index] = obs.rank;
        }
        ranks
    }

    pub fn rank_sum(&self, group: SampleGroup) -> f64 {
        self.observations
            .iter()
            .filter(|o| o.group == group)
            .map(|o| o.rank)
            .sum()
    }

    /// Sizes of each maximal run of tied values, singletons included
    pub fn tie_block_sizes(&self) -> Vec<usize> {
        self.observations
            .chunk_by(|a, b| a.value == b.value)
            .map(|block| block.len())
            .collect()
    }
}
