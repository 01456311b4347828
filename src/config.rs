use crate::domain::error::DomainError;
use crate::domain::values::source_id::SourceId;
use crate::infrastructure::sources::DEFAULT_API_BASE;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_ALIASES_PATH: &str = "./currencies.json";
const DEFAULT_OUTPUT_PATH: &str = "./arz.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read from `NERKH_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    /// Localization dataset (`currencies.json`).
    pub aliases_path: PathBuf,
    pub output_path: PathBuf,
    /// Per-source deadline.
    pub timeout: Duration,
    /// Sources to run, in any order; merge priority is fixed by [`SourceId`].
    pub sources: Vec<SourceId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            aliases_path: DEFAULT_ALIASES_PATH.into(),
            output_path: DEFAULT_OUTPUT_PATH.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sources: SourceId::ALL.to_vec(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys keep their
    /// defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let mut config = Self::default();

        if let Some(base) = get("NERKH_API_BASE") {
            config.api_base = base;
        }
        if let Some(path) = get("NERKH_ALIASES") {
            config.aliases_path = path.into();
        }
        if let Some(path) = get("NERKH_OUTPUT") {
            config.output_path = path.into();
        }
        if let Some(secs) = get("NERKH_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&secs)?;
        }
        if let Some(list) = get("NERKH_SOURCES") {
            config.sources = parse_sources(list.split(','))?;
        }

        Ok(config)
    }
}

pub fn parse_timeout(secs: &str) -> Result<Duration, DomainError> {
    match secs.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(Duration::from_secs(n)),
        _ => Err(DomainError::Config(format!(
            "timeout must be a positive number of seconds, got '{secs}'"
        ))),
    }
}

/// Parses source names, dropping blanks and duplicates.
pub fn parse_sources<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Vec<SourceId>, DomainError> {
    let mut sources = Vec::new();
    for name in names.into_iter().map(str::trim).filter(|n| !n.is_empty()) {
        let id: SourceId = name.parse().map_err(DomainError::Config)?;
        if !sources.contains(&id) {
            sources.push(id);
        }
    }
    if sources.is_empty() {
        return Err(DomainError::Config("at least one source is required".into()));
    }
    Ok(sources)
}
