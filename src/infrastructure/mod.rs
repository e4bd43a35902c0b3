//! Browser-facing adapters: the CoinGecko HTTP client, the DOM presentation
//! flag and console logging.

pub mod dom;
pub mod http;
pub mod services;

pub use dom::DocumentClassFlag;
pub use http::{ClientConfig, CoinGeckoClient, MarketsQuery};
