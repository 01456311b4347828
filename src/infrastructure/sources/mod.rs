pub mod crypto;
pub mod fiat;
pub mod gold;

use crate::domain::ports::source_fetcher::FetchError;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://admin.alanchand.com/api";

const USER_AGENT: &str = concat!("nerkh/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for all sources. The timeout bounds each request so a
/// hung upstream cannot stall the join barrier.
pub fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

/// `{"price": n}` element of a vendor price history; the first element is
/// the most recent quote.
#[derive(Debug, serde::Deserialize)]
struct PricePoint {
    #[serde(default)]
    price: Option<f64>,
}

/// Most recent price, or zero when the history is missing or empty.
fn latest_price(history: &Option<Vec<PricePoint>>) -> f64 {
    history
        .as_deref()
        .and_then(|points| points.first())
        .and_then(|p| p.price)
        .unwrap_or(0.0)
}

/// POSTs a JSON body and decodes the response as `T`. A body that does not
/// match `T` is a [`FetchError::Decode`], which is fatal for the source.
async fn post_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    body: &serde_json::Value,
    accept: Option<&str>,
) -> Result<T, FetchError> {
    let mut request = client.post(url).json(body);
    if let Some(accept) = accept {
        request = request.header(reqwest::header::ACCEPT, accept);
    }

    let resp = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(FetchError::HttpStatus {
            status: resp.status().as_u16(),
            endpoint: url.to_string(),
        });
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Decodes each raw item on its own so one malformed entry only drops itself.
/// Failures are described in `skipped`.
fn decode_items<T: DeserializeOwned>(
    items: Vec<serde_json::Value>,
    skipped: &mut Vec<String>,
) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, raw)| match serde_json::from_value::<T>(raw) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping malformed item");
                skipped.push(format!("item {i}: {e}"));
                None
            }
        })
        .collect()
}
