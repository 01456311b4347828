use super::{decode_items, latest_price, post_json, PricePoint};
use crate::domain::entities::record::Record;
use crate::domain::ports::source_fetcher::{FetchError, FetchOutput, SourceFetcher};
use crate::domain::values::alias::AliasTable;
use crate::domain::values::source_id::SourceId;
use crate::domain::values::title_case::title_case;
use async_trait::async_trait;
use std::sync::Arc;

/// Vendor slug for the gram coin. It shares a slug with an unrelated fiat
/// currency, so it is published under [`GRAM_COIN_CODE`] instead.
pub const GRAM_COIN_SLUG: &str = "sek";
pub const GRAM_COIN_CODE: &str = "gram";

/// Gold and coin list (`POST {base}/gold`).
pub struct GoldSource {
    endpoint: String,
    client: reqwest::Client,
    aliases: Arc<AliasTable>,
}

impl GoldSource {
    pub fn new(api_base: &str, client: reqwest::Client, aliases: Arc<AliasTable>) -> Self {
        Self {
            endpoint: format!("{}/gold", api_base.trim_end_matches('/')),
            client,
            aliases,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct GoldResponse {
    gold: Vec<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct GoldItem {
    slug: String,
    #[serde(default)]
    price: Option<Vec<PricePoint>>,
}

#[async_trait]
impl SourceFetcher for GoldSource {
    fn source(&self) -> SourceId {
        SourceId::Gold
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<FetchOutput, FetchError> {
        let body = serde_json::json!({ "lang": "fa" });
        let data: GoldResponse = post_json(&self.client, &self.endpoint, &body, None).await?;
        Ok(self.normalize(data.gold))
    }
}

impl GoldSource {
    fn normalize(&self, raw: Vec<serde_json::Value>) -> FetchOutput {
        let mut output = FetchOutput::default();
        let items: Vec<GoldItem> = decode_items(raw, &mut output.skipped_items);

        for item in items {
            // Unknown slugs are still published, just without display metadata.
            let (name, icon, en) = match self.aliases.get(&item.slug) {
                Some(alias) => (alias.name.clone(), alias.icon.clone(), title_case(&alias.en)),
                None => {
                    tracing::debug!(slug = %item.slug, "gold slug missing from alias table");
                    output.localization_misses.push(item.slug.clone());
                    Default::default()
                }
            };

            let code = if item.slug == GRAM_COIN_SLUG {
                GRAM_COIN_CODE.to_string()
            } else {
                item.slug
            };

            output.records.push(Record::new(
                code,
                name,
                latest_price(&item.price),
                icon,
                en,
                SourceId::Gold,
            ));
        }

        output
    }
}
