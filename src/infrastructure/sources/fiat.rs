use super::{decode_items, latest_price, post_json, PricePoint};
use crate::domain::entities::record::Record;
use crate::domain::localizer::Localizer;
use crate::domain::ports::source_fetcher::{FetchError, FetchOutput, SourceFetcher};
use crate::domain::values::source_id::SourceId;
use async_trait::async_trait;

const FLAG_ICON_BASE: &str =
    "https://raw.githubusercontent.com/HatScripts/circle-flags/refs/heads/gh-pages/flags";

/// Flag keys whose icon lives under a different file name.
const FLAG_ICON_ALIASES: &[(&str, &str)] = &[("eu", "european_union")];

/// Slugs containing this mark regional sub-variants (e.g. `usd-herat`), which
/// are not published.
const REGIONAL_SEPARATOR: char = '-';

/// Fiat currency list (`POST {base}/arz`).
pub struct FiatSource {
    endpoint: String,
    client: reqwest::Client,
    localizer: Localizer,
}

impl FiatSource {
    pub fn new(api_base: &str, client: reqwest::Client, localizer: Localizer) -> Self {
        Self {
            endpoint: format!("{}/arz", api_base.trim_end_matches('/')),
            client,
            localizer,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ArzResponse {
    arz: Vec<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ArzItem {
    slug: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    flag: Option<String>,
    #[serde(default)]
    price: Option<Vec<PricePoint>>,
}

#[async_trait]
impl SourceFetcher for FiatSource {
    fn source(&self) -> SourceId {
        SourceId::Fiat
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<FetchOutput, FetchError> {
        let body = serde_json::json!({ "lang": "fa" });
        let data: ArzResponse = post_json(&self.client, &self.endpoint, &body, None).await?;
        Ok(self.normalize(data.arz))
    }
}

impl FiatSource {
    fn normalize(&self, raw: Vec<serde_json::Value>) -> FetchOutput {
        let mut output = FetchOutput::default();
        let items: Vec<ArzItem> = decode_items(raw, &mut output.skipped_items);

        for item in items {
            if item.slug.contains(REGIONAL_SEPARATOR) {
                continue;
            }

            let name = item.name.unwrap_or_default();
            let flag = item.flag.unwrap_or_default();

            // Localized by the vendor flag key, not the slug.
            let localized = self.localizer.secondary_name(&flag, &name);
            if localized.missed {
                tracing::debug!(slug = %item.slug, %flag, "no localization entry, using vendor name");
                output.localization_misses.push(flag.clone());
            }

            output.records.push(Record::new(
                item.slug,
                name,
                latest_price(&item.price),
                flag_icon(&flag),
                localized.en,
                SourceId::Fiat,
            ));
        }

        output
    }
}

fn flag_icon(flag: &str) -> String {
    if flag.is_empty() {
        return String::new();
    }
    let file = FLAG_ICON_ALIASES
        .iter()
        .find(|(key, _)| *key == flag)
        .map_or(flag, |(_, alias)| *alias);
    format!("{FLAG_ICON_BASE}/{file}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::alias::{AliasEntry, AliasTable};
    use serde_json::json;
    use std::sync::Arc;

    fn source() -> FiatSource {
        let table: AliasTable = [
            ("us", AliasEntry { en: "us dollar".into(), ..Default::default() }),
            ("eu", AliasEntry { en: "euro".into(), ..Default::default() }),
        ]
        .into_iter()
        .collect();
        FiatSource::new(
            "http://localhost/api/",
            reqwest::Client::new(),
            Localizer::new(Arc::new(table)),
        )
    }

    #[test]
    fn test_endpoint() {
        let s = source();
        assert_eq!(s.endpoint(), "http://localhost/api/arz");
        assert_eq!(s.source(), SourceId::Fiat);
    }

    #[test]
    fn test_normalize_basic_item() {
        let out = source().normalize(vec![json!({
            "slug": "usd", "name": "دلار", "flag": "us",
            "price": [{"price": 61000.0}, {"price": 60000.0}]
        })]);
        let r = &out.records[0];
        assert_eq!(r.code, "usd");
        assert_eq!(r.name, "دلار");
        assert_eq!(r.price, 61000.0);
        assert_eq!(r.en, "Us Dollar");
        assert_eq!(r.icon, format!("{FLAG_ICON_BASE}/us.svg"));
        assert!(out.localization_misses.is_empty());
    }

    #[test]
    fn test_regional_variants_excluded() {
        let out = source().normalize(vec![
            json!({"slug": "usd-herat", "name": "دلار هرات", "flag": "af"}),
            json!({"slug": "usd", "name": "دلار", "flag": "us"}),
        ]);
        assert_eq!(out.records.len(), 1);
        assert!(out.records.iter().all(|r| !r.code.contains('-')));
    }

    #[test]
    fn test_eu_flag_alias_keeps_localization_key() {
        let out = source().normalize(vec![json!({"slug": "eur", "name": "یورو", "flag": "eu"})]);
        let r = &out.records[0];
        assert_eq!(r.icon, format!("{FLAG_ICON_BASE}/european_union.svg"));
        assert_eq!(r.en, "Euro");
    }

    #[test]
    fn test_localization_miss_falls_back_to_vendor_name() {
        let out = source().normalize(vec![json!({"slug": "try", "name": "turkish lira", "flag": "tr"})]);
        assert_eq!(out.records[0].en, "Turkish Lira");
        assert_eq!(out.localization_misses, vec!["tr".to_string()]);
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let out = source().normalize(vec![
            json!({"slug": "aed", "name": "درهم", "flag": "ae", "price": []}),
            json!({"slug": "cad", "name": "دلار کانادا", "flag": "ca"}),
        ]);
        assert_eq!(out.records.len(), 2);
        assert!(out.records.iter().all(|r| r.price == 0.0));
    }

    #[test]
    fn test_item_without_slug_is_skipped() {
        let out = source().normalize(vec![json!({"name": "?", "flag": "us"}), json!({"slug": "usd"})]);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.skipped_items.len(), 1);
    }
}
