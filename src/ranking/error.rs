//----------------------------------------
// input validation errors
//----------------------------------------
use crate::error::ImmunostatErr;
use crate::ranking::types::SampleGroup;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum InvalidInputErr {
    #[error("{0} must contain at least one observation")]
    EmptyGroup(SampleGroup),
    #[error("{group} has a non-finite observation at index {index}; got {value}")]
    NonFiniteObservation {
        group: SampleGroup,
        index: usize,
        value: f64,
    },
}

// Observations compare bitwise so a NaN error equals itself
impl PartialEq for InvalidInputErr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (InvalidInputErr::EmptyGroup(a), InvalidInputErr::EmptyGroup(b)) => a == b,
            (
                InvalidInputErr::NonFiniteObservation {
                    group: g_a,
                    index: i_a,
                    value: v_a,
                },
                InvalidInputErr::NonFiniteObservation {
                    group: g_b,
                    index: i_b,
                    value: v_b,
                },
            ) => g_a == g_b && i_a == i_b && v_a.to_bits() == v_b.to_bits(),
            _ => false,
        }
    }
}

impl Into<ImmunostatErr> for InvalidInputErr {
    fn into(self) -> ImmunostatErr {
        ImmunostatErr::InvalidInput(self)
    }
}

/// Fails on the first empty group, group 1 checked before group 2
pub fn check_non_empty(group_1: &[f64], group_2: &[f64]) -> Result<(), ImmunostatErr> {
    if group_1.is_empty() {
        return Err(InvalidInputErr::EmptyGroup(SampleGroup::First).into());
    }
    if group_2.is_empty() {
        return Err(InvalidInputErr::EmptyGroup(SampleGroup::Second).into());
    }
    Ok(())
}

pub fn check_finite(group_1: &[f64], group_2: &[f64]) -> Result<(), ImmunostatErr> {
    for (group, values) in [(SampleGroup::First, group_1), (SampleGroup::Second, group_2)] {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidInputErr::NonFiniteObservation {
                group,
                index,
                value,
            }
            .into());
        }
    }
    Ok(())
}
