use crate::domain::entities::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The merged price document produced by one run.
///
/// Serializes as `{"date": ..., "currencies": {code: record}}`. The map form
/// keeps exactly one record per code; `BTreeMap` keeps the output ordering
/// stable between runs with identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "date")]
    pub generated_at: String,
    #[serde(rename = "currencies")]
    pub records: BTreeMap<String, Record>,
}

impl Snapshot {
    pub fn new(generated_at: String, records: BTreeMap<String, Record>) -> Self {
        Self {
            generated_at,
            records,
        }
    }

    pub fn get(&self, code: &str) -> Option<&Record> {
        self.records.get(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
