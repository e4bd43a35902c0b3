#![allow(dead_code)]

use std::cell::RefCell;

use crypto_tracker_wasm::domain::errors::{FetchError, FetchResult};
use crypto_tracker_wasm::domain::market_data::{
    Asset, AssetId, MarketCapRank, MarketDataSource, TotalSupply, UsdAmount,
};
use crypto_tracker_wasm::infrastructure::http::decode_markets;
use futures::channel::oneshot;

pub fn asset(rank: u32, id: &str, name: &str) -> Asset {
    Asset {
        id: AssetId::from(id),
        market_cap_rank: MarketCapRank::new(rank).unwrap(),
        name: name.to_string(),
        symbol: id.chars().take(3).collect(),
        market_cap: UsdAmount::try_from(1_000_000.0 / rank as f64).unwrap(),
        current_price: UsdAmount::try_from(10.0 / rank as f64).unwrap(),
        total_supply: TotalSupply::Known(1_000.0),
        total_volume: UsdAmount::try_from(5_000.0).unwrap(),
        image_url: format!("https://example.test/{id}.png"),
    }
}

/// `count` well-formed assets in descending market-cap order
pub fn top_assets(count: u32) -> Vec<Asset> {
    (1..=count).map(|rank| asset(rank, &format!("asset-{rank}"), &format!("Asset {rank}"))).collect()
}

/// Resolves immediately with a fixed outcome
pub struct StaticSource(pub FetchResult<Vec<Asset>>);

impl MarketDataSource for StaticSource {
    async fn fetch_top_assets(&self) -> FetchResult<Vec<Asset>> {
        self.0.clone()
    }
}

/// Decodes a canned response body the way the HTTP client does
pub struct BodySource(pub &'static str);

impl MarketDataSource for BodySource {
    async fn fetch_top_assets(&self) -> FetchResult<Vec<Asset>> {
        decode_markets(self.0)
    }
}

/// Resolves when the test sends the outcome
pub struct ChannelSource(RefCell<Option<oneshot::Receiver<FetchResult<Vec<Asset>>>>>);

impl ChannelSource {
    pub fn new(receiver: oneshot::Receiver<FetchResult<Vec<Asset>>>) -> Self {
        Self(RefCell::new(Some(receiver)))
    }
}

impl MarketDataSource for ChannelSource {
    async fn fetch_top_assets(&self) -> FetchResult<Vec<Asset>> {
        let receiver = self.0.borrow_mut().take().expect("ChannelSource is single use");
        receiver
            .await
            .unwrap_or_else(|_| Err(FetchError::RequestFailed("sender dropped".into())))
    }
}
