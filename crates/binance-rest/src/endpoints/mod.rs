//! API endpoint implementations
//!
//! Every wrapper checks its required parameters, merges them over the
//! caller's optional [`Params`](crate::Params) and hands the result to
//! [`BinanceRestClient::execute`](crate::BinanceRestClient::execute).
//! Required values always win over a same-named optional parameter.

pub mod sub_account;
pub mod wallet;

pub use sub_account::SubAccountEndpoints;
pub use wallet::WalletEndpoints;
