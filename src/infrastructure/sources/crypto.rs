use super::{decode_items, post_json};
use crate::domain::entities::record::Record;
use crate::domain::ports::source_fetcher::{FetchError, FetchOutput, SourceFetcher};
use crate::domain::values::source_id::SourceId;
use crate::domain::values::title_case::title_case;
use async_trait::async_trait;

const ICON_BASE: &str = "https://alanchand.com/images/logo/crypto";

/// Coins pegged 1:1 to USD. Their USD price carries no information, so the
/// toman price is published instead.
pub const STABLECOINS: &[&str] = &["usdt", "dai"];

/// Cryptocurrency list (`POST {base}/crypto`). The response is a bare array.
pub struct CryptoSource {
    endpoint: String,
    client: reqwest::Client,
}

impl CryptoSource {
    pub fn new(api_base: &str, client: reqwest::Client) -> Self {
        Self {
            endpoint: format!("{}/crypto", api_base.trim_end_matches('/')),
            client,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct CryptoItem {
    slug: String,
    /// Persian name.
    #[serde(default)]
    fname: Option<String>,
    /// English name.
    #[serde(default)]
    name: Option<String>,
    /// USD price.
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    toman: Option<f64>,
}

#[async_trait]
impl SourceFetcher for CryptoSource {
    fn source(&self) -> SourceId {
        SourceId::Crypto
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<FetchOutput, FetchError> {
        let body = serde_json::json!({});
        let data: Vec<serde_json::Value> = post_json(
            &self.client,
            &self.endpoint,
            &body,
            Some("application/json, text/plain, */*"),
        )
        .await?;
        Ok(normalize(data))
    }
}

pub fn is_stablecoin(code: &str) -> bool {
    STABLECOINS.iter().any(|s| s.eq_ignore_ascii_case(code))
}

fn normalize(raw: Vec<serde_json::Value>) -> FetchOutput {
    let mut output = FetchOutput::default();
    let items: Vec<CryptoItem> = decode_items(raw, &mut output.skipped_items);

    output.records = items
        .into_iter()
        .map(|item| {
            let price = if is_stablecoin(&item.slug) {
                item.toman.unwrap_or(0.0)
            } else {
                item.price.unwrap_or(0.0)
            };
            let icon = format!("{ICON_BASE}/{}.svg", item.slug.to_lowercase());
            let en = title_case(item.name.as_deref().unwrap_or_default());

            Record::new(
                item.slug,
                item.fname.unwrap_or_default(),
                price,
                icon,
                en,
                SourceId::Crypto,
            )
        })
        .collect();

    output
}
