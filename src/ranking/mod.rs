//----------------------------------------
// ranking mod
//----------------------------------------
pub mod error;
pub mod midrank;
pub mod types;
