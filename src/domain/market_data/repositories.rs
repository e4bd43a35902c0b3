use crate::domain::errors::FetchResult;
use crate::domain::market_data::Asset;

/// Source of the top-assets snapshot.
///
/// One call is one attempt: implementations do not retry or cache.
#[allow(async_fn_in_trait)]
pub trait MarketDataSource {
    /// Assets ordered by descending market cap, exactly as the provider returned them
    async fn fetch_top_assets(&self) -> FetchResult<Vec<Asset>>;
}
