//! Shared types for Binance sub-account and wallet REST APIs
//!
//! This crate provides the vocabulary used across the SDK.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`BinanceApiError`], [`BinanceErrorCode`] - Binance error bodies and known error codes
//! - [`SnapshotType`], [`UniversalTransferType`], [`AccountType`] - String-valued endpoint parameters
//! - [`FuturesType`], [`TransferDirection`] - Integer-valued endpoint parameters
//! - [`ParseEnumError`] - Returned when parsing an enum from its wire string fails

pub mod enums;
pub mod error;
pub mod error_codes;

// Re-export commonly used types
pub use enums::*;
pub use error::*;
pub use error_codes::*;
