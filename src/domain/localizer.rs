use crate::domain::values::alias::{AliasEntry, AliasTable};
use crate::domain::values::title_case::title_case;
use std::sync::Arc;

/// Secondary-language name resolved for one vendor key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized {
    pub en: String,
    /// True when the key was absent and the vendor name was used instead.
    pub missed: bool,
}

/// Read-only lookup over an [`AliasTable`]. Cheap to clone; the table is
/// shared, never mutated.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    table: Arc<AliasTable>,
}

impl Localizer {
    pub fn new(table: Arc<AliasTable>) -> Self {
        Self { table }
    }

    pub fn lookup(&self, key: &str) -> Option<&AliasEntry> {
        self.table.get(key)
    }

    /// Title-cased secondary name for `key`, falling back to `fallback` when
    /// the table has no non-empty entry for it.
    pub fn secondary_name(&self, key: &str, fallback: &str) -> Localized {
        match self.lookup(key).filter(|e| !e.en.is_empty()) {
            Some(entry) => Localized {
                en: title_case(&entry.en),
                missed: false,
            },
            None => Localized {
                en: title_case(fallback),
                missed: true,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
