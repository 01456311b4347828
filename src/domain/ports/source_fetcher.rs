use crate::domain::entities::record::Record;
use crate::domain::values::source_id::SourceId;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// An upstream provider that produces normalized records.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    fn source(&self) -> SourceId;

    /// Endpoint this fetcher talks to, for logs and `nerkh sources`.
    fn endpoint(&self) -> &str;

    async fn fetch(&self) -> Result<FetchOutput, FetchError>;
}

/// Source-fatal failures. Any of these drops the whole source from the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP status {status} from {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("Decode error: {0}")]
    Decode(String),

    /// The fetch task panicked or was cancelled before producing a result.
    #[error("Fetch task failed: {0}")]
    Task(String),
}

/// Records from one source plus the non-fatal problems met while
/// normalizing them.
#[derive(Debug, Clone, Default)]
pub struct FetchOutput {
    pub records: Vec<Record>,
    /// Keys that had no localization entry and fell back to the vendor name.
    pub localization_misses: Vec<String>,
    /// Items dropped because a required field was missing or mistyped.
    pub skipped_items: Vec<String>,
}

impl FetchOutput {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }
}
