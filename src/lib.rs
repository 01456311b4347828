pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::refresh::{RefreshReport, RefreshUseCase};
use crate::config::Config;
use crate::domain::error::DomainError;
use crate::domain::localizer::Localizer;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::snapshot_writer::SnapshotWriter;
use crate::domain::ports::source_fetcher::SourceFetcher;
use crate::domain::values::alias::AliasTable;
use crate::domain::values::source_id::SourceId;
use crate::infrastructure::aliases::dataset::load_dataset_or_empty;
use crate::infrastructure::aliases::gold::gold_aliases;
use crate::infrastructure::clock::jalali::JalaliClock;
use crate::infrastructure::output::json_file::JsonFileWriter;
use crate::infrastructure::sources::build_client;
use crate::infrastructure::sources::crypto::CryptoSource;
use crate::infrastructure::sources::fiat::FiatSource;
use crate::infrastructure::sources::gold::GoldSource;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub source: SourceId,
    pub endpoint: String,
}

pub struct Nerkh {
    refresh_uc: RefreshUseCase,
    writer: Arc<dyn SnapshotWriter>,
}

impl Nerkh {
    /// Wires the HTTP sources, Tehran clock and JSON file writer from config.
    /// The alias tables are loaded here, once, and shared read-only.
    pub fn new(config: &Config) -> Self {
        let client = build_client(config.timeout);
        let localizer = Localizer::new(Arc::new(load_dataset_or_empty(&config.aliases_path)));
        let gold = Arc::new(gold_aliases());

        let fetchers = build_fetchers(config, client, localizer, gold);

        Self::with_providers(
            fetchers,
            Arc::new(JalaliClock::tehran()),
            Arc::new(JsonFileWriter::new(config.output_path.clone())),
            config.timeout,
        )
    }

    pub fn with_providers(
        fetchers: Vec<Arc<dyn SourceFetcher>>,
        clock: Arc<dyn Clock>,
        writer: Arc<dyn SnapshotWriter>,
        timeout: Duration,
    ) -> Self {
        Self {
            refresh_uc: RefreshUseCase::new(fetchers, clock, timeout),
            writer,
        }
    }

    /// Fetches and merges without writing anything.
    pub async fn refresh(&self) -> RefreshReport {
        self.refresh_uc.execute().await
    }

    /// Fetches, merges and writes the snapshot. Source failures only shrink
    /// the snapshot; a write failure is returned.
    pub async fn run(&self) -> Result<RefreshReport, DomainError> {
        let report = self.refresh().await;
        self.writer.write(&report.snapshot)?;
        Ok(report)
    }

    pub fn sources(&self) -> Vec<SourceInfo> {
        self.refresh_uc
            .fetchers()
            .iter()
            .map(|f| SourceInfo {
                source: f.source(),
                endpoint: f.endpoint().to_string(),
            })
            .collect()
    }
}

fn build_fetchers(
    config: &Config,
    client: reqwest::Client,
    localizer: Localizer,
    gold: Arc<AliasTable>,
) -> Vec<Arc<dyn SourceFetcher>> {
    let mut sources = config.sources.clone();
    sources.sort();
    sources.dedup();

    sources
        .into_iter()
        .map(|id| -> Arc<dyn SourceFetcher> {
            match id {
                SourceId::Fiat => Arc::new(FiatSource::new(&config.api_base, client.clone(), localizer.clone())),
                SourceId::Gold => Arc::new(GoldSource::new(&config.api_base, client.clone(), Arc::clone(&gold))),
                SourceId::Crypto => Arc::new(CryptoSource::new(&config.api_base, client.clone())),
            }
        })
        .collect()
}
