use crate::domain::error::DomainError;
use crate::domain::values::alias::{AliasEntry, AliasTable};
use serde::Deserialize;
use std::path::Path;

/// One row of `currencies.json`: a flag key and its English currency name.
#[derive(Debug, Deserialize)]
struct DatasetRow {
    country: String,
    #[serde(default)]
    en: String,
}

/// Parses the localization dataset (`[{"country": .., "en": ..}]`). Later
/// rows win on duplicate keys.
pub fn parse_dataset(json: &str) -> Result<AliasTable, DomainError> {
    let rows: Vec<DatasetRow> = serde_json::from_str(json)
        .map_err(|e| DomainError::Parse(format!("localization dataset: {e}")))?;

    Ok(rows
        .into_iter()
        .map(|row| {
            (
                row.country,
                AliasEntry {
                    en: row.en,
                    ..Default::default()
                },
            )
        })
        .collect())
}

pub fn load_dataset(path: &Path) -> Result<AliasTable, DomainError> {
    let json = std::fs::read_to_string(path)?;
    parse_dataset(&json)
}

/// Loads the dataset, or logs why it could not and returns an empty table so
/// fiat names fall back to vendor names.
pub fn load_dataset_or_empty(path: &Path) -> AliasTable {
    match load_dataset(path) {
        Ok(table) => {
            tracing::info!(path = %path.display(), entries = table.len(), "loaded localization dataset");
            table
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "localization dataset unavailable, using vendor names");
            AliasTable::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_dataset() {
        let table = parse_dataset(
            r#"[{"country": "us", "en": "US Dollar"}, {"country": "eu", "en": "euro"}, {"country": "xx"}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("us").unwrap().en, "US Dollar");
        assert!(table.get("xx").unwrap().en.is_empty());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(
            parse_dataset(r#"{"us": "dollar"}"#),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"country": "gb", "en": "pound"}}]"#).unwrap();
        let table = load_dataset(file.path()).unwrap();
        assert_eq!(table.get("gb").unwrap().en, "pound");
    }

    #[test]
    fn test_missing_file_yields_empty_table() {
        let table = load_dataset_or_empty(Path::new("/nonexistent/currencies.json"));
        assert!(table.is_empty());
        assert!(matches!(
            load_dataset(Path::new("/nonexistent/currencies.json")),
            Err(DomainError::Io(_))
        ));
    }
}
