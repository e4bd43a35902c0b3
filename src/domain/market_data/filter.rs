//! Search projection over a fetched batch.

use super::entities::Asset;

/// Assets whose name contains `query`, compared case-insensitively, in input order.
///
/// The query is matched literally: surrounding whitespace is not trimmed.
/// An empty query returns the whole batch.
pub fn project(assets: &[Asset], query: &str) -> Vec<Asset> {
    if query.is_empty() {
        return assets.to_vec();
    }

    let needle = query.to_lowercase();
    assets
        .iter()
        .filter(|asset| asset.name_contains_lowercase(&needle))
        .cloned()
        .collect()
}
