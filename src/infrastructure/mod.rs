pub mod aliases;
pub mod clock;
pub mod output;
pub mod sources;
