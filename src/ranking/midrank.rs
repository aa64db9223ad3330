use itertools::Itertools;
use tracing::trace;

use crate::error::ImmunostatErr;
use crate::ranking::error::check_non_empty;
use crate::ranking::types::{RankAssignment, RankedObservation, SampleGroup};

/// Pools both groups, sorts ascending and gives every run of equal values
/// the mean of the 1-based ranks it spans. Ties between groups keep their
/// input order (group 1 first), so equal inputs always produce equal output.
pub fn assign_midranks(group_1: &[f64], group_2: &[f64]) -> Result<RankAssignment, ImmunostatErr> {
    check_non_empty(group_1, group_2)?;

    let tag = |group: SampleGroup| {
        move |(index, &value): (usize, &f64)| RankedObservation {
            value,
            group,
            index,
            rank: 0.0,
        }
    };

    let mut observations: Vec<RankedObservation> = group_1
        .iter()
        .enumerate()
        .map(tag(SampleGroup::First))
        .chain(group_2.iter().enumerate().map(tag(SampleGroup::Second)))
        .sorted_by(|a, b| a.value.total_cmp(&b.value))
        .collect();

    //----------------------------------------
    // Scan runs of equal values
    let mut start = 0;
    for block in observations.chunk_by_mut(|a, b| a.value == b.value) {
        let end = start + block.len();
        // Ranks start + 1 ..= end, averaged
        let midrank = (start + end + 1) as f64 / 2.0;
        if block.len() > 1 {
            trace!(value = block[0].value, size = block.len(), midrank, "tied block");
        }
        for obs in block.iter_mut() {
            obs.rank = midrank;
        }
        start = end;
    }

    Ok(RankAssignment {
        observations,
        n_1: group_1.len(),
        n_2: group_2.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn total_rank(assignment: &RankAssignment) -> f64 {
        assignment.observations().iter().map(|o| o.rank).sum()
    }

    #[test]
    fn no_ties_ranks_are_positions() {
        let ranks = assign_midranks(&[3.0, 1.0], &[2.0, 4.0]).unwrap();
        assert_eq!(ranks.ranks_for(SampleGroup::First), vec![3.0, 1.0]);
        assert_eq!(ranks.ranks_for(SampleGroup::Second), vec![2.0, 4.0]);
    }

    #[test]
    fn three_way_tie_gets_middle_rank() {
        // Tied block spans ranks 4, 5, 6
        let ranks = assign_midranks(&[1.0, 2.0, 3.0, 7.0], &[7.0, 7.0, 9.0]).unwrap();
        assert_eq!(ranks.ranks_for(SampleGroup::First), vec![1.0, 2.0, 3.0, 5.0]);
        assert_eq!(ranks.ranks_for(SampleGroup::Second), vec![5.0, 5.0, 7.0]);
        assert_eq!(ranks.tie_block_sizes(), vec![1, 1, 1, 3, 1]);
    }

    #[test]
    fn all_tied() {
        let ranks = assign_midranks(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]).unwrap();
        assert!(ranks.observations().iter().all(|o| o.rank == 3.5));
        assert_eq!(ranks.rank_sum(SampleGroup::First), 10.5);
    }

    #[test]
    fn negative_and_zero_values() {
        let ranks = assign_midranks(&[-0.0, -3.5], &[0.0, 2.0]).unwrap();
        // -0.0 and 0.0 compare equal and share ranks 2 and 3
        assert_eq!(ranks.ranks_for(SampleGroup::First), vec![2.5, 1.0]);
        assert_eq!(ranks.ranks_for(SampleGroup::Second), vec![2.5, 4.0]);
    }

    #[test]
    fn empty_group_rejected() {
        if let Err(e) = assign_midranks(&[1.0], &[]) {
            assert!(e.is_invalid_input());
        } else {
            panic!()
        }
    }

    #[test]
    fn repeated_calls_identical() {
        let a = assign_midranks(&[0.3, 0.1, 0.3], &[0.2, 0.3]).unwrap();
        let b = assign_midranks(&[0.3, 0.1, 0.3], &[0.2, 0.3]).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn rank_sum_is_triangular(
            g1 in prop::collection::vec(0i32..6, 1..25),
            g2 in prop::collection::vec(0i32..6, 1..25),
        ) {
            // Small integer range forces heavy ties
            let g1: Vec<f64> = g1.into_iter().map(f64::from).collect();
            let g2: Vec<f64> = g2.into_iter().map(f64::from).collect();
            let ranks = assign_midranks(&g1, &g2).unwrap();
            let n = (g1.len() + g2.len()) as f64;
            prop_assert_eq!(total_rank(&ranks), n * (n + 1.0) / 2.0);
            prop_assert_eq!(
                ranks.rank_sum(SampleGroup::First) + ranks.rank_sum(SampleGroup::Second),
                n * (n + 1.0) / 2.0
            );
        }

        #[test]
        fn ranks_follow_value_order(
            g1 in prop::collection::vec(-100.0f64..100.0, 1..20),
            g2 in prop::collection::vec(-100.0f64..100.0, 1..20),
        ) {
            let ranks = assign_midranks(&g1, &g2).unwrap();
            for pair in ranks.observations().windows(2) {
                prop_assert!(pair[0].value <= pair[1].value);
                prop_assert!(pair[0].rank <= pair[1].rank);
            }
        }
    }
}
