//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use binance_rest::{BinanceRestClient, ClientConfig, Credentials, MockTransport};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test_key";
pub const TEST_SECRET: &str = "test_secret";

/// HMAC-SHA256 of `amount=1.5&asset=BTC&timestamp=1700000000000` keyed by `test_secret`
pub const GOLDEN_SIGNATURE: &str =
    "34fb1f1545f65728f638cef3efc88f57bd4c9f79a7b88e001ca2bfed99896f6e";

/// HMAC-SHA256 of `limit=10&page=1&timestamp=1700000000000` keyed by `test_secret`
pub const LIST_SIGNATURE: &str =
    "9bcbdd660801e3d2b984336c614e6aa1376027deda7962d0ed90b0c677b4a771";

/// Binance error body for a malformed parameter
pub const BAD_PARAM_BODY: &str = r#"{"code":-1102,"msg":"bad param"}"#;

/// Sample sub-account list response
pub const SUB_ACCOUNT_LIST: &str = r#"{
    "subAccounts": [
        {
            "email": "testsub@gmail.com",
            "isFreeze": false,
            "createTime": 1544433328000,
            "isManagedSubAccount": false,
            "isAssetManagementSubAccount": false
        }
    ]
}"#;

/// Route library logs to the test harness; safe to call from every test
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("binance_rest=debug")
        .with_test_writer()
        .try_init();
}

pub fn credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_SECRET).expect("valid test credentials")
}

/// Client pointed at `base_url` over the real HTTP transport
pub fn http_client(base_url: &str) -> BinanceRestClient {
    BinanceRestClient::with_config(ClientConfig::new(credentials()).with_base_url(base_url))
        .expect("client builds")
}

/// Client backed by a recording mock transport
pub fn mock_client() -> (BinanceRestClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let client = BinanceRestClient::with_transport(ClientConfig::new(credentials()), transport.clone());
    (client, transport)
}

/// Path component of a signed request URL
pub fn path_of(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path_and_query = without_scheme
        .find('/')
        .map_or("", |i| &without_scheme[i..]);
    path_and_query
        .split_once('?')
        .map_or(path_and_query, |(path, _)| path)
}

/// Query parameters of a signed request URL, in wire order
pub fn query_pairs(url: &str) -> Vec<(String, String)> {
    let query = url.split_once('?').map_or("", |(_, q)| q);
    serde_urlencoded::from_str(query).expect("query decodes")
}

pub fn is_lower_hex(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}
