//! Credentials and request signing for Binance API
//!
//! Binance authenticates `USER_DATA` endpoints with two pieces:
//! the API key travels in the `X-MBX-APIKEY` header, and the secret key
//! signs the query string with HMAC-SHA256. The secret never leaves the process.
//!
//! # Example
//!
//! ```no_run
//! use binance_auth::Credentials;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load credentials from environment
//! let creds = Credentials::from_env()?;
//!
//! // Sign a query string
//! let signature = creds.sign("asset=BTC&timestamp=1700000000000");
//! assert_eq!(signature.len(), 64);
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, API_KEY_ENV, SECRET_KEY_ENV};
pub use error::{AuthError, AuthResult};
