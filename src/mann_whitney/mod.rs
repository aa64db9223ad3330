//----------------------------------------
// mann_whitney mod
//----------------------------------------
pub mod std_normal;
pub mod types;
