use crate::domain::entities::record::Record;
use crate::domain::values::source_id::SourceId;
use std::collections::BTreeMap;

/// Combines per-source record lists into one map keyed by code.
///
/// Sources are visited in [`SourceId`] priority order regardless of the order
/// they are passed in. On a code collision the record with the strictly
/// greater price is kept; ties (and NaN prices) keep the record seen first.
pub fn merge(mut sources: Vec<(SourceId, Vec<Record>)>) -> BTreeMap<String, Record> {
    sources.sort_by_key(|(source, _)| *source);

    let mut merged: BTreeMap<String, Record> = BTreeMap::new();
    for record in sources.into_iter().flat_map(|(_, records)| records) {
        match merged.get_mut(&record.code) {
            Some(existing) => {
                if record.price > existing.price {
                    *existing = record;
                }
            }
            None => {
                merged.insert(record.code.clone(), record);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(code: &str, price: f64, source: SourceId) -> Record {
        Record::new(code, format!("{code}-{source}"), price, "", "", source)
    }

    #[test]
    fn test_single_source_passes_through() {
        let usd = rec("usd", 100.0, SourceId::Fiat);
        let merged = merge(vec![(SourceId::Fiat, vec![usd.clone()])]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["usd"], usd);
    }

    #[test]
    fn test_higher_price_wins() {
        let merged = merge(vec![
            (SourceId::Fiat, vec![rec("usd", 100.0, SourceId::Fiat)]),
            (SourceId::Crypto, vec![rec("usd", 105.0, SourceId::Crypto)]),
        ]);
        assert_eq!(merged["usd"].price, 105.0);
        assert_eq!(merged["usd"].source, SourceId::Crypto);
    }

    #[test]
    fn test_higher_price_wins_from_earlier_source() {
        let merged = merge(vec![
            (SourceId::Fiat, vec![rec("usd", 105.0, SourceId::Fiat)]),
            (SourceId::Crypto, vec![rec("usd", 100.0, SourceId::Crypto)]),
        ]);
        assert_eq!(merged["usd"].source, SourceId::Fiat);
    }

    #[test]
    fn test_tie_goes_to_earlier_priority() {
        let merged = merge(vec![
            (SourceId::Crypto, vec![rec("usd", 100.0, SourceId::Crypto)]),
            (SourceId::Gold, vec![rec("usd", 100.0, SourceId::Gold)]),
        ]);
        assert_eq!(merged["usd"].source, SourceId::Gold);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = vec![
            (SourceId::Fiat, vec![rec("usd", 1.0, SourceId::Fiat), rec("eur", 2.0, SourceId::Fiat)]),
            (SourceId::Gold, vec![rec("usd", 1.0, SourceId::Gold)]),
            (SourceId::Crypto, vec![rec("eur", 3.0, SourceId::Crypto)]),
        ];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(merge(a), merge(b));
    }

    #[test]
    fn test_duplicate_within_source() {
        let merged = merge(vec![(
            SourceId::Fiat,
            vec![rec("usd", 1.0, SourceId::Fiat), rec("usd", 2.0, SourceId::Fiat)],
        )]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["usd"].price, 2.0);
    }

    #[test]
    fn test_nan_never_replaces() {
        let merged = merge(vec![
            (SourceId::Fiat, vec![rec("usd", 1.0, SourceId::Fiat)]),
            (SourceId::Gold, vec![rec("usd", f64::NAN, SourceId::Gold)]),
        ]);
        assert_eq!(merged["usd"].price, 1.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge(vec![]).is_empty());
        assert!(merge(vec![(SourceId::Gold, vec![])]).is_empty());
    }
}
