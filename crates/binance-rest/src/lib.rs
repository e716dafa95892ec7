//! Signed REST client for Binance sub-account and wallet endpoints
//!
//! Every call goes through one pipeline: validate required parameters,
//! stamp a millisecond `timestamp`, serialize the parameters to a canonical
//! query string, sign it with HMAC-SHA256, send it with the `X-MBX-APIKEY`
//! header and hand back the raw response body. Decoding the body is left
//! to the caller.
//!
//! # Features
//!
//! - **Sub-accounts**: Account management, assets, transfers, futures
//!   accounts, API IP restrictions, managed sub-accounts
//! - **Wallet**: Balances, deposit/withdrawal history, trades, snapshots
//!
//! # Example
//!
//! ```no_run
//! use binance_rest::{BinanceRestClient, ClientConfig, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BinanceRestClient::with_config(ClientConfig::from_env()?)?;
//!
//!     let assets = client.sub_account().assets("sub@example.com", Params::new()).await?;
//!     println!("{}", String::from_utf8_lossy(&assets));
//!
//!     match client.wallet().my_trades("BTCUSDT", Params::new().with("limit", 5)).await {
//!         Ok(body) => println!("{}", String::from_utf8_lossy(&body)),
//!         Err(e) => match e.api_error() {
//!             Some(api) => eprintln!("rejected: {}", api),
//!             None => eprintln!("failed: {}", e),
//!         },
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Enable the `test-utils` feature to get [`MockTransport`], which records
//! signed requests instead of sending them.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod transport;
pub mod validation;

// Re-export main types
pub use client::{BinanceRestClient, ClientConfig, DEFAULT_BASE_URL};
pub use endpoints::{SubAccountEndpoints, WalletEndpoints};
pub use error::{RestError, RestResult};
pub use params::{ParamValue, Params};
pub use transport::{ReqwestTransport, SignedRequest, Transport, TransportError, TransportResponse, API_KEY_HEADER};
pub use validation::{check_required_parameter, check_required_parameters, RequiredParam};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;

pub use binance_auth::{AuthError, Credentials};
pub use reqwest::Method;
