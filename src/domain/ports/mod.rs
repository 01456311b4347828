pub mod clock;
pub mod snapshot_writer;
pub mod source_fetcher;
