use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::{FetchError, FetchResult},
    logging::LogComponent,
    market_data::{Asset, MarketDataSource},
};
use crate::infrastructure::dom::embedded_json;
use crate::{log_debug, log_info, log_warn};

/// Id of the optional `<script type="application/json">` carrying overrides
pub const CLIENT_CONFIG_ELEMENT_ID: &str = "client-config";

/// Query parameters of the `/coins/markets` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketsQuery {
    pub vs_currency: String,
    pub order: String,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
}

impl Default for MarketsQuery {
    fn default() -> Self {
        Self {
            vs_currency: "usd".to_string(),
            order: "market_cap_desc".to_string(),
            per_page: 100,
            page: 1,
            sparkline: false,
        }
    }
}

/// Where and what to ask the provider. Every field has a default, so a
/// host page can override just the pieces it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub query: MarketsQuery,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            query: MarketsQuery::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Overrides embedded in the host page, or defaults when absent or invalid
    pub fn from_host_page() -> Self {
        Self::from_overrides(embedded_json(CLIENT_CONFIG_ELEMENT_ID).as_deref())
    }

    pub fn from_overrides(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => {
                log_debug!(
                    LogComponent::Infrastructure("ClientConfig"),
                    "using overrides, base url {}",
                    config.base_url
                );
                config
            }
            Err(e) => {
                log_warn!(
                    LogComponent::Infrastructure("ClientConfig"),
                    "ignoring invalid overrides: {e}"
                );
                Self::default()
            }
        }
    }
}

/// CoinGecko markets client. One request per call: no retries, no caching.
#[derive(Debug, Clone, Default)]
pub struct CoinGeckoClient {
    config: ClientConfig,
}

impl CoinGeckoClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn markets_url(&self) -> String {
        let query = &self.config.query;
        format!(
            "{}/coins/markets?vs_currency={}&order={}&per_page={}&page={}&sparkline={}",
            self.config.base_url.trim_end_matches('/'),
            query.vs_currency,
            query.order,
            query.per_page,
            query.page,
            query.sparkline
        )
    }
}

impl MarketDataSource for CoinGeckoClient {
    async fn fetch_top_assets(&self) -> FetchResult<Vec<Asset>> {
        let url = self.markets_url();
        log_debug!(LogComponent::Infrastructure("CoinGecko"), "📡 GET {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(format!("failed to send request: {e}")))?;

        ensure_success(response.ok(), response.status(), &response.status_text())?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::RequestFailed(format!("failed to read body: {e}")))?;
        let assets = decode_markets(&body)?;

        log_info!(
            LogComponent::Infrastructure("CoinGecko"),
            "✅ Loaded {} assets",
            assets.len()
        );
        Ok(assets)
    }
}

/// Non-2xx responses are transport failures, whatever their body says
pub fn ensure_success(ok: bool, status: u16, status_text: &str) -> FetchResult<()> {
    if ok {
        Ok(())
    } else {
        Err(FetchError::RequestFailed(format!("HTTP {status} {status_text}")))
    }
}

/// Decode a `/coins/markets` body. Anything other than an array of complete
/// asset records is a `DecodeFailed`.
pub fn decode_markets(body: &str) -> FetchResult<Vec<Asset>> {
    serde_json::from_str(body).map_err(|e| FetchError::DecodeFailed(e.to_string()))
}
