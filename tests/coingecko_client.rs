#![cfg(target_arch = "wasm32")]

use crypto_tracker_wasm::domain::errors::FetchError;
use crypto_tracker_wasm::domain::market_data::MarketDataSource;
use crypto_tracker_wasm::infrastructure::{ClientConfig, CoinGeckoClient};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn unreachable_origin_is_request_failure() {
    let config = ClientConfig { base_url: "http://127.0.0.1:9".to_string(), ..ClientConfig::default() };
    let client = CoinGeckoClient::with_config(config);

    match client.fetch_top_assets().await {
        Err(FetchError::RequestFailed(message)) => {
            assert!(message.starts_with("failed to send request"), "{message}")
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[wasm_bindgen_test]
fn missing_config_element_uses_defaults() {
    assert_eq!(ClientConfig::from_host_page(), ClientConfig::default());
}
