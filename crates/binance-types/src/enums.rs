//! Account, transfer and futures enums used as endpoint parameters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseEnumError;

/// Account type for daily account snapshots (`type` on `/sapi/v1/accountSnapshot`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SnapshotType {
    /// Spot wallet
    Spot,
    /// Cross margin account
    Margin,
    /// USD-M futures account
    Futures,
}

impl SnapshotType {
    /// Returns the value as sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "SPOT",
            Self::Margin => "MARGIN",
            Self::Futures => "FUTURES",
        }
    }
}

impl fmt::Display for SnapshotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnapshotType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPOT" => Ok(Self::Spot),
            "MARGIN" => Ok(Self::Margin),
            "FUTURES" => Ok(Self::Futures),
            other => Err(ParseEnumError::new("SnapshotType", other)),
        }
    }
}

/// Transfer type for the user universal transfer endpoints (`/sapi/v1/asset/transfer`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UniversalTransferType {
    /// Spot to USD-M futures
    #[serde(rename = "MAIN_UMFUTURE")]
    MainUmFuture,
    /// Spot to COIN-M futures
    #[serde(rename = "MAIN_CMFUTURE")]
    MainCmFuture,
    /// Spot to cross margin
    MainMargin,
    /// USD-M futures to spot
    #[serde(rename = "UMFUTURE_MAIN")]
    UmFutureMain,
    /// COIN-M futures to spot
    #[serde(rename = "CMFUTURE_MAIN")]
    CmFutureMain,
    /// Cross margin to spot
    MarginMain,
    /// Spot to funding
    MainFunding,
    /// Funding to spot
    FundingMain,
}

impl UniversalTransferType {
    /// Returns the value as sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MainUmFuture => "MAIN_UMFUTURE",
            Self::MainCmFuture => "MAIN_CMFUTURE",
            Self::MainMargin => "MAIN_MARGIN",
            Self::UmFutureMain => "UMFUTURE_MAIN",
            Self::CmFutureMain => "CMFUTURE_MAIN",
            Self::MarginMain => "MARGIN_MAIN",
            Self::MainFunding => "MAIN_FUNDING",
            Self::FundingMain => "FUNDING_MAIN",
        }
    }

    /// Returns true if funds leave the spot wallet
    pub fn is_from_spot(&self) -> bool {
        matches!(
            self,
            Self::MainUmFuture | Self::MainCmFuture | Self::MainMargin | Self::MainFunding
        )
    }
}

impl fmt::Display for UniversalTransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UniversalTransferType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAIN_UMFUTURE" => Ok(Self::MainUmFuture),
            "MAIN_CMFUTURE" => Ok(Self::MainCmFuture),
            "MAIN_MARGIN" => Ok(Self::MainMargin),
            "UMFUTURE_MAIN" => Ok(Self::UmFutureMain),
            "CMFUTURE_MAIN" => Ok(Self::CmFutureMain),
            "MARGIN_MAIN" => Ok(Self::MarginMain),
            "MAIN_FUNDING" => Ok(Self::MainFunding),
            "FUNDING_MAIN" => Ok(Self::FundingMain),
            other => Err(ParseEnumError::new("UniversalTransferType", other)),
        }
    }
}

/// Account type on either side of a sub-account universal transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Spot wallet
    Spot,
    /// USD-M futures wallet
    UsdtFuture,
    /// COIN-M futures wallet
    CoinFuture,
    /// Cross margin wallet
    Margin,
    /// Isolated margin wallet
    IsolatedMargin,
}

impl AccountType {
    /// Returns the value as sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "SPOT",
            Self::UsdtFuture => "USDT_FUTURE",
            Self::CoinFuture => "COIN_FUTURE",
            Self::Margin => "MARGIN",
            Self::IsolatedMargin => "ISOLATED_MARGIN",
        }
    }

    /// Returns true for either futures wallet
    pub fn is_futures(&self) -> bool {
        matches!(self, Self::UsdtFuture | Self::CoinFuture)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPOT" => Ok(Self::Spot),
            "USDT_FUTURE" => Ok(Self::UsdtFuture),
            "COIN_FUTURE" => Ok(Self::CoinFuture),
            "MARGIN" => Ok(Self::Margin),
            "ISOLATED_MARGIN" => Ok(Self::IsolatedMargin),
            other => Err(ParseEnumError::new("AccountType", other)),
        }
    }
}

/// Futures product family (`futuresType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuturesType {
    /// USD-M futures
    UsdMargined = 1,
    /// COIN-M futures
    CoinMargined = 2,
}

impl FuturesType {
    /// Returns the numeric code sent to the API
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Look up a futures type by its numeric code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::UsdMargined),
            2 => Some(Self::CoinMargined),
            _ => None,
        }
    }
}

impl fmt::Display for FuturesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Direction filter for sub-account transfer history (`type` on `subUserHistory`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferDirection {
    /// Transfer into this account
    In = 1,
    /// Transfer out of this account
    Out = 2,
}

impl TransferDirection {
    /// Returns the numeric code sent to the API
    pub fn code(&self) -> i32 {
        *self as i32
    }
}
