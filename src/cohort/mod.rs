//----------------------------------------
// cohort mod
//----------------------------------------
pub mod analyze;
pub mod error;
pub mod filter;
pub mod load;
pub mod overview;
pub mod types;
