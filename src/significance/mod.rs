//----------------------------------------
// significance mod
//----------------------------------------
pub mod test_significance;
pub mod types;
