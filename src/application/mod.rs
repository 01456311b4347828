pub mod merge;
pub mod refresh;
