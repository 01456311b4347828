pub mod dataset;
pub mod gold;
