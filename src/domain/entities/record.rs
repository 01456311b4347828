use crate::domain::values::source_id::SourceId;
use serde::{Deserialize, Serialize};

/// One normalized quote, keyed by `code` when merged into a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub code: String,
    /// Display name in the primary (Persian) locale.
    pub name: String,
    /// Unit depends on the source: toman for fiat/gold, USD for most crypto.
    pub price: f64,
    pub icon: String,
    /// Secondary-language (English) display name.
    pub en: String,
    pub source: SourceId,
}

impl Record {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        icon: impl Into<String>,
        en: impl Into<String>,
        source: SourceId,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
            icon: icon.into(),
            en: en.into(),
            source,
        }
    }
}
