//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::cohort::analyze::analyze_cohort;
pub use crate::cohort::filter::split_by_response;
pub use crate::cohort::load::{load_records, read_records};
pub use crate::cohort::overview::frequency_table;
pub use crate::effect_size::cohens_d::{cohens_d, pooled_sd};
pub use crate::effect_size::compute_effect_size::{compute_effect_size, effect_size};
pub use crate::interpretation::compose::compose_interpretation;
pub use crate::mann_whitney::std_normal::{std_normal_cdf, two_tailed_p_value};
pub use crate::mann_whitney::u_test::mann_whitney_u;
pub use crate::ranking::midrank::assign_midranks;
pub use crate::significance::test_significance::test_significance;
