//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use nerkh::domain::entities::record::Record;
use nerkh::domain::entities::snapshot::Snapshot;
use nerkh::domain::error::DomainError;
use nerkh::domain::ports::clock::Clock;
use nerkh::domain::ports::snapshot_writer::SnapshotWriter;
use nerkh::domain::ports::source_fetcher::{FetchError, FetchOutput, SourceFetcher};
use nerkh::domain::values::source_id::SourceId;
use nerkh::Nerkh;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const FIXED_TIME: &str = "1403/01/01, 12:00";

pub struct FixedClock;

impl Clock for FixedClock {
    fn now_string(&self) -> String {
        FIXED_TIME.to_string()
    }
}

/// Captures written snapshots in memory.
#[derive(Default)]
pub struct MemoryWriter {
    pub written: Mutex<Vec<Snapshot>>,
}

impl SnapshotWriter for MemoryWriter {
    fn write(&self, snapshot: &Snapshot) -> Result<(), DomainError> {
        self.written.lock().unwrap().push(snapshot.clone());
        Ok(())
    }
}

pub struct FailingWriter;

impl SnapshotWriter for FailingWriter {
    fn write(&self, _snapshot: &Snapshot) -> Result<(), DomainError> {
        Err(DomainError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only destination",
        )))
    }
}

/// Returns canned records (or a canned error) after an optional delay.
pub struct StubFetcher {
    pub source: SourceId,
    pub result: Result<Vec<Record>, String>,
    pub delay: Duration,
}

impl StubFetcher {
    pub fn ok(source: SourceId, records: Vec<Record>) -> Arc<Self> {
        Arc::new(Self {
            source,
            result: Ok(records),
            delay: Duration::ZERO,
        })
    }

    pub fn failing(source: SourceId, msg: &str) -> Arc<Self> {
        Arc::new(Self {
            source,
            result: Err(msg.to_string()),
            delay: Duration::ZERO,
        })
    }

    pub fn delayed(source: SourceId, records: Vec<Record>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            source,
            result: Ok(records),
            delay,
        })
    }
}

#[async_trait]
impl SourceFetcher for StubFetcher {
    fn source(&self) -> SourceId {
        self.source
    }

    fn endpoint(&self) -> &str {
        "stub"
    }

    async fn fetch(&self) -> Result<FetchOutput, FetchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.result {
            Ok(records) => Ok(FetchOutput::from_records(records.clone())),
            Err(msg) => Err(FetchError::Network(msg.clone())),
        }
    }
}

pub fn rec(code: &str, price: f64, source: SourceId) -> Record {
    Record::new(code, code.to_uppercase(), price, format!("{code}.svg"), code, source)
}

pub fn setup(fetchers: Vec<Arc<dyn SourceFetcher>>) -> (Nerkh, Arc<MemoryWriter>) {
    let writer = Arc::new(MemoryWriter::default());
    let nerkh = Nerkh::with_providers(
        fetchers,
        Arc::new(FixedClock),
        writer.clone(),
        Duration::from_secs(5),
    );
    (nerkh, writer)
}
