//----------------------------------------
// interpretation mod
//----------------------------------------
pub mod compose;
pub mod types;
