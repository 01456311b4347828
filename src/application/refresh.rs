use crate::application::merge::merge;
use crate::domain::entities::record::Record;
use crate::domain::entities::snapshot::Snapshot;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::source_fetcher::{FetchError, FetchOutput, SourceFetcher};
use crate::domain::values::source_id::SourceId;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

/// Outcome of one source within a run.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: SourceId,
    pub endpoint: String,
    pub records: usize,
    pub localization_misses: usize,
    pub skipped_items: Vec<String>,
    pub error: Option<String>,
}

impl SourceReport {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of a full fan-out/fan-in run.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshReport {
    pub run_id: Uuid,
    pub generated_at: String,
    pub total_records: usize,
    pub sources: Vec<SourceReport>,
    #[serde(skip)]
    pub snapshot: Snapshot,
}

impl RefreshReport {
    pub fn failed_sources(&self) -> usize {
        self.sources.iter().filter(|s| s.failed()).count()
    }
}

/// Runs every fetcher concurrently, waits for all of them, then merges.
pub struct RefreshUseCase {
    fetchers: Vec<Arc<dyn SourceFetcher>>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl RefreshUseCase {
    pub fn new(fetchers: Vec<Arc<dyn SourceFetcher>>, clock: Arc<dyn Clock>, timeout: Duration) -> Self {
        Self {
            fetchers,
            clock,
            timeout,
        }
    }

    pub fn fetchers(&self) -> &[Arc<dyn SourceFetcher>] {
        &self.fetchers
    }

    pub async fn execute(&self) -> RefreshReport {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("refresh", %run_id);
        self.run(run_id).instrument(span).await
    }

    async fn run(&self, run_id: Uuid) -> RefreshReport {
        tracing::info!(sources = self.fetchers.len(), "starting refresh");

        // Fan out: one task per source, each with its own result slot.
        let handles: Vec<_> = self
            .fetchers
            .iter()
            .map(|fetcher| {
                let source = fetcher.source();
                let endpoint = fetcher.endpoint().to_string();
                let fetcher = Arc::clone(fetcher);
                let deadline = self.timeout;
                let span = tracing::info_span!("source", %source);
                let handle = tokio::spawn(
                    async move {
                        match tokio::time::timeout(deadline, fetcher.fetch()).await {
                            Ok(result) => result,
                            Err(_) => Err(FetchError::Timeout(deadline)),
                        }
                    }
                    .instrument(span),
                );
                (source, endpoint, handle)
            })
            .collect();

        // Join barrier: nothing is merged until every task has finished.
        let mut collected: Vec<(SourceId, Vec<Record>)> = Vec::with_capacity(handles.len());
        let mut reports = Vec::with_capacity(handles.len());
        for (source, endpoint, handle) in handles {
            let result = handle
                .await
                .unwrap_or_else(|e| Err(FetchError::Task(e.to_string())));

            match result {
                Ok(output) => {
                    tracing::info!(
                        %source,
                        records = output.records.len(),
                        localization_misses = output.localization_misses.len(),
                        skipped = output.skipped_items.len(),
                        "source fetched"
                    );
                    reports.push(success_report(source, endpoint, &output));
                    collected.push((source, output.records));
                }
                Err(e) => {
                    tracing::warn!(%source, %endpoint, error = %e, "source failed, contributing zero records");
                    reports.push(SourceReport {
                        source,
                        endpoint,
                        records: 0,
                        localization_misses: 0,
                        skipped_items: vec![],
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let records = merge(collected);
        let generated_at = self.clock.now_string();
        let snapshot = Snapshot::new(generated_at.clone(), records);

        let failed = reports.iter().filter(|r| r.failed()).count();
        if !reports.is_empty() && failed == reports.len() {
            tracing::warn!(failed, "every source failed, emitting empty snapshot");
        }
        tracing::info!(records = snapshot.len(), failed, "refresh complete");

        RefreshReport {
            run_id,
            generated_at,
            total_records: snapshot.len(),
            sources: reports,
            snapshot,
        }
    }
}

fn success_report(source: SourceId, endpoint: String, output: &FetchOutput) -> SourceReport {
    SourceReport {
        source,
        endpoint,
        records: output.records.len(),
        localization_misses: output.localization_misses.len(),
        skipped_items: output.skipped_items.clone(),
        error: None,
    }
}
