pub use super::value_objects::{AssetId, MarketCapRank, TotalSupply, UsdAmount};
use serde::{Deserialize, Serialize};

/// Domain entity - one asset's market snapshot as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub market_cap_rank: MarketCapRank,
    pub name: String,
    pub symbol: String,
    pub market_cap: UsdAmount,
    pub current_price: UsdAmount,
    #[serde(default)]
    pub total_supply: TotalSupply,
    pub total_volume: UsdAmount,
    #[serde(rename = "image")]
    pub image_url: String,
}

impl Asset {
    /// Ticker as displayed, uppercased regardless of provider casing
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Case-insensitive substring test on the name. `needle` must already be lowercase.
    pub fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
