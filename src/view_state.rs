//! Read-only snapshot handed to the view on every relevant state change.

use serde::Serialize;

use crate::domain::{
    lifecycle::{FetchLifecycle, LifecycleStatus},
    market_data::{Asset, project},
    theme::ThemeMode,
};
use crate::format_utils::{format_supply, format_usd};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub status: LifecycleStatus,
    /// Batch projected through the current search query
    pub assets: Vec<Asset>,
    pub error_message: Option<String>,
    pub theme: ThemeMode,
    pub search_query: String,
}

impl DashboardSnapshot {
    pub fn capture(lifecycle: &FetchLifecycle, search_query: &str, theme: ThemeMode) -> Self {
        Self {
            status: lifecycle.status(),
            assets: project(lifecycle.assets(), search_query),
            error_message: lifecycle.error_message().map(str::to_string),
            theme,
            search_query: search_query.to_string(),
        }
    }

    pub fn rows(&self) -> Vec<AssetRow> {
        self.assets.iter().map(AssetRow::from).collect()
    }
}

/// One table row, every cell already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRow {
    pub key: String,
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub market_cap: String,
    pub price: String,
    pub total_supply: String,
    pub volume: String,
    pub icon_url: String,
}

impl From<&Asset> for AssetRow {
    fn from(asset: &Asset) -> Self {
        Self {
            key: asset.id.value().to_string(),
            rank: asset.market_cap_rank.value(),
            name: asset.name.clone(),
            symbol: asset.display_symbol(),
            market_cap: format_usd(asset.market_cap, 0),
            price: format_usd(asset.current_price, 2),
            total_supply: format_supply(asset.total_supply),
            volume: format_usd(asset.total_volume, 0),
            icon_url: asset.image_url.clone(),
        }
    }
}
