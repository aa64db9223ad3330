//----------------------------------------
// effect_size mod
//----------------------------------------
pub mod cohens_d;
pub mod compute_effect_size;
pub mod error;
pub mod rank_biserial;
pub mod types;
