use crate::domain::entities::snapshot::Snapshot;
use crate::domain::error::DomainError;

/// Destination for the merged snapshot. Called once per run, after every
/// source has finished.
pub trait SnapshotWriter: Send + Sync {
    fn write(&self, snapshot: &Snapshot) -> Result<(), DomainError>;
}
