//! Sub-account endpoints
//!
//! Account management, asset queries, transfers and API restrictions for
//! sub-accounts, plus the managed sub-account family. Most of these are
//! master-account only; `transfer_to_sub` and `transfer_to_master` are
//! called with sub-account credentials.
//!
//! All endpoints are signed and return the raw response body.

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::params::{ParamValue, Params};
use crate::validation::{check_required_parameter, check_required_parameters};
use reqwest::Method;
use tracing::{debug, instrument};

/// Sub-account endpoints
pub struct SubAccountEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> SubAccountEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    // ========================================================================
    // Account management
    // ========================================================================

    /// Create a virtual sub-account
    ///
    /// # Arguments
    /// * `sub_account_string` - Seed string; Binance derives the virtual email from it
    #[instrument(skip(self, params))]
    pub async fn create_virtual_sub_account(
        &self,
        sub_account_string: &str,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        check_required_parameter(sub_account_string, "subAccountString")?;

        let params = params.with("subAccountString", sub_account_string);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/virtualSubAccount", params)
            .await
    }

    /// Query the sub-account list
    ///
    /// Optional: `email`, `isFreeze`, `page` (default 1), `limit` (default 10, max 200).
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: Params) -> RestResult<Vec<u8>> {
        debug!("Listing sub-accounts");
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/list", params)
            .await
    }

    /// Query sub-account status on margin and futures
    #[instrument(skip(self, params))]
    pub async fn status(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/status", params)
            .await
    }

    /// Enable margin for a sub-account
    #[instrument(skip(self, params))]
    pub async fn enable_margin(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/margin/enable", params)
            .await
    }

    /// Enable futures for a sub-account
    #[instrument(skip(self, params))]
    pub async fn enable_futures(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/futures/enable", params)
            .await
    }

    /// Enable options for a sub-account
    #[instrument(skip(self, params))]
    pub async fn enable_options(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/eoptions/enable", params)
            .await
    }

    /// Enable or disable leveraged tokens (BLVT) for a sub-account
    ///
    /// `enable_blvt = false` is sent as `enableBlvt=false`.
    #[instrument(skip(self, params))]
    pub async fn enable_leverage_token(
        &self,
        email: &str,
        enable_blvt: bool,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        check_required_parameters(&[("email", &email), ("enableBlvt", &enable_blvt)])?;

        let params = params.with("email", email).with("enableBlvt", enable_blvt);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/blvt/enable", params)
            .await
    }

    // ========================================================================
    // Assets
    // ========================================================================

    /// Query sub-account assets (v3)
    #[instrument(skip(self, params))]
    pub async fn assets(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v3/sub-account/assets", params)
            .await
    }

    /// Query sub-account assets (v4)
    #[instrument(skip(self, params))]
    pub async fn assets_v4(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v4/sub-account/assets", params)
            .await
    }

    /// Get a sub-account deposit address
    ///
    /// # Arguments
    /// * `email` - Sub-account email
    /// * `coin` - Coin symbol (e.g., "USDT")
    ///
    /// Optional: `network`, `amount`.
    #[instrument(skip(self, params))]
    pub async fn deposit_address(&self, email: &str, coin: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameters(&[("email", &email), ("coin", &coin)])?;

        let params = params.with("email", email).with("coin", coin);
        self.client
            .execute(Method::GET, "/sapi/v1/capital/deposit/subAddress", params)
            .await
    }

    /// Get sub-account deposit history
    ///
    /// Optional: `coin`, `status`, `startTime`, `endTime`, `limit`, `offset`, `txId`.
    #[instrument(skip(self, params))]
    pub async fn deposit_history(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/capital/deposit/subHisrec", params)
            .await
    }

    /// Sub-account margin account detail
    #[instrument(skip(self, params))]
    pub async fn margin_account(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/margin/account", params)
            .await
    }

    /// Summary of all sub-account margin accounts
    #[instrument(skip(self, params))]
    pub async fn margin_account_summary(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/margin/accountSummary", params)
            .await
    }

    /// BTC-valued spot asset summary across sub-accounts
    ///
    /// Optional: `email`, `page`, `size`.
    #[instrument(skip(self, params))]
    pub async fn spot_summary(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/spotSummary", params)
            .await
    }

    /// Sub-account transaction statistics
    #[instrument(skip(self, params))]
    pub async fn transaction_statistics(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/transaction-statistics", params)
            .await
    }

    // ========================================================================
    // Transfers
    // ========================================================================

    /// Transfer between a sub-account's spot and futures wallets
    ///
    /// # Arguments
    /// * `email` - Sub-account email
    /// * `asset` - Asset to transfer
    /// * `amount` - Amount (`f64` or `Decimal`)
    /// * `transfer_type` - 1: spot to USDT-M, 2: USDT-M to spot,
    ///   3: spot to COIN-M, 4: COIN-M to spot
    #[instrument(skip(self, amount, params))]
    pub async fn futures_transfer(
        &self,
        email: &str,
        asset: &str,
        amount: impl Into<ParamValue>,
        transfer_type: i32,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let amount = amount.into();
        check_required_parameters(&[
            ("email", &email),
            ("asset", &asset),
            ("amount", &amount),
            ("type", &transfer_type),
        ])?;

        debug!("Futures transfer of {} for sub-account", asset);
        let params = params
            .with("email", email)
            .with("asset", asset)
            .with("amount", amount)
            .with("type", transfer_type);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/futures/transfer", params)
            .await
    }

    /// Transfer between a sub-account's spot and margin wallets
    ///
    /// `transfer_type`: 1 spot to margin, 2 margin to spot.
    #[instrument(skip(self, amount, params))]
    pub async fn margin_transfer(
        &self,
        email: &str,
        asset: &str,
        amount: impl Into<ParamValue>,
        transfer_type: i32,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let amount = amount.into();
        check_required_parameters(&[
            ("email", &email),
            ("asset", &asset),
            ("amount", &amount),
            ("type", &transfer_type),
        ])?;

        let params = params
            .with("email", email)
            .with("asset", asset)
            .with("amount", amount)
            .with("type", transfer_type);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/margin/transfer", params)
            .await
    }

    /// Transfer to another sub-account of the same master (sub-account credentials)
    #[instrument(skip(self, amount, params))]
    pub async fn transfer_to_sub(
        &self,
        to_email: &str,
        asset: &str,
        amount: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let amount = amount.into();
        check_required_parameters(&[("toEmail", &to_email), ("asset", &asset), ("amount", &amount)])?;

        let params = params
            .with("toEmail", to_email)
            .with("asset", asset)
            .with("amount", amount);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/transfer/subToSub", params)
            .await
    }

    /// Transfer to the master account (sub-account credentials)
    #[instrument(skip(self, amount, params))]
    pub async fn transfer_to_master(
        &self,
        asset: &str,
        amount: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let amount = amount.into();
        check_required_parameters(&[("asset", &asset), ("amount", &amount)])?;

        let params = params.with("asset", asset).with("amount", amount);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/transfer/subToMaster", params)
            .await
    }

    /// Transfer history as seen by the calling sub-account
    ///
    /// Optional: `asset`, `type` (1 in, 2 out), `startTime`, `endTime`, `limit`.
    #[instrument(skip(self, params))]
    pub async fn transfer_history(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/transfer/subUserHistory", params)
            .await
    }

    /// Spot asset transfer history between master and sub-accounts
    #[instrument(skip(self, params))]
    pub async fn spot_transfer_history(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/sub/transfer/history", params)
            .await
    }

    /// Futures asset transfer history for a sub-account
    ///
    /// # Arguments
    /// * `email` - Sub-account email
    /// * `futures_type` - `FuturesType` or its code (1 USDT-M, 2 COIN-M)
    #[instrument(skip(self, futures_type, params))]
    pub async fn futures_internal_transfer_history(
        &self,
        email: &str,
        futures_type: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let futures_type = futures_type.into();
        check_required_parameters(&[("email", &email), ("futuresType", &futures_type)])?;

        let params = params.with("email", email).with("futuresType", futures_type);
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/futures/internalTransfer", params)
            .await
    }

    /// Futures asset transfer between two sub-accounts
    #[instrument(skip(self, futures_type, amount, params))]
    pub async fn futures_internal_transfer(
        &self,
        from_email: &str,
        to_email: &str,
        futures_type: impl Into<ParamValue>,
        asset: &str,
        amount: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let futures_type = futures_type.into();
        let amount = amount.into();
        check_required_parameters(&[
            ("fromEmail", &from_email),
            ("toEmail", &to_email),
            ("futuresType", &futures_type),
            ("asset", &asset),
            ("amount", &amount),
        ])?;

        let params = params
            .with("fromEmail", from_email)
            .with("toEmail", to_email)
            .with("futuresType", futures_type)
            .with("asset", asset)
            .with("amount", amount);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/futures/internalTransfer", params)
            .await
    }

    /// Universal transfer between master and sub-account wallets
    ///
    /// # Arguments
    /// * `from_account_type` - `AccountType` or its string form (e.g., "SPOT")
    /// * `to_account_type` - Destination account type
    /// * `asset` - Asset to transfer
    /// * `amount` - Amount
    ///
    /// Optional: `fromEmail`, `toEmail`, `clientTranId`, `symbol` (isolated margin).
    #[instrument(skip(self, from_account_type, to_account_type, amount, params))]
    pub async fn universal_transfer(
        &self,
        from_account_type: impl Into<ParamValue>,
        to_account_type: impl Into<ParamValue>,
        asset: &str,
        amount: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let from_account_type = from_account_type.into();
        let to_account_type = to_account_type.into();
        let amount = amount.into();
        check_required_parameters(&[
            ("fromAccountType", &from_account_type),
            ("toAccountType", &to_account_type),
            ("asset", &asset),
            ("amount", &amount),
        ])?;

        let params = params
            .with("fromAccountType", from_account_type)
            .with("toAccountType", to_account_type)
            .with("asset", asset)
            .with("amount", amount);
        self.client
            .execute(Method::POST, "/sapi/v1/sub-account/universalTransfer", params)
            .await
    }

    /// Universal transfer history
    #[instrument(skip(self, params))]
    pub async fn universal_transfer_history(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/universalTransfer", params)
            .await
    }

    // ========================================================================
    // Futures accounts
    // ========================================================================

    /// Detail on a sub-account's USDT-M futures account (v1)
    #[instrument(skip(self, params))]
    pub async fn futures_account(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/futures/account", params)
            .await
    }

    /// Detail on a sub-account's futures account (v2)
    #[instrument(skip(self, futures_type, params))]
    pub async fn futures_account_v2(
        &self,
        email: &str,
        futures_type: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let futures_type = futures_type.into();
        check_required_parameters(&[("email", &email), ("futuresType", &futures_type)])?;

        let params = params.with("email", email).with("futuresType", futures_type);
        self.client
            .execute(Method::GET, "/sapi/v2/sub-account/futures/account", params)
            .await
    }

    /// Summary of all sub-account futures accounts (v2)
    #[instrument(skip(self, futures_type, params))]
    pub async fn futures_account_summary(
        &self,
        futures_type: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let futures_type = futures_type.into();
        check_required_parameter(&futures_type, "futuresType")?;

        let params = params.with("futuresType", futures_type);
        self.client
            .execute(Method::GET, "/sapi/v2/sub-account/futures/accountSummary", params)
            .await
    }

    /// USDT-M futures positions of a sub-account (v1)
    #[instrument(skip(self, params))]
    pub async fn futures_position_risk(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/futures/positionRisk", params)
            .await
    }

    /// Futures positions of a sub-account (v2)
    #[instrument(skip(self, futures_type, params))]
    pub async fn futures_position_risk_v2(
        &self,
        email: &str,
        futures_type: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let futures_type = futures_type.into();
        check_required_parameters(&[("email", &email), ("futuresType", &futures_type)])?;

        let params = params.with("email", email).with("futuresType", futures_type);
        self.client
            .execute(Method::GET, "/sapi/v2/sub-account/futures/positionRisk", params)
            .await
    }

    // ========================================================================
    // API key IP restrictions
    // ========================================================================

    /// Update the IP restriction of a sub-account API key
    ///
    /// # Arguments
    /// * `email` - Sub-account email
    /// * `sub_account_api_key` - API key of the sub-account
    /// * `status` - "1" unrestricted, "2" restricted to `ipAddress`
    ///
    /// Optional: `ipAddress` (comma separated).
    #[instrument(skip(self, sub_account_api_key, params))]
    pub async fn update_ip_restriction(
        &self,
        email: &str,
        sub_account_api_key: &str,
        status: &str,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        check_required_parameters(&[
            ("email", &email),
            ("subAccountApiKey", &sub_account_api_key),
            ("status", &status),
        ])?;

        let params = params
            .with("email", email)
            .with("subAccountApiKey", sub_account_api_key)
            .with("status", status);
        self.client
            .execute(Method::POST, "/sapi/v2/sub-account/subAccountApi/ipRestriction", params)
            .await
    }

    /// Get the IP restriction of a sub-account API key
    #[instrument(skip(self, sub_account_api_key, params))]
    pub async fn ip_restriction(
        &self,
        email: &str,
        sub_account_api_key: &str,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        check_required_parameters(&[("email", &email), ("subAccountApiKey", &sub_account_api_key)])?;

        let params = params
            .with("email", email)
            .with("subAccountApiKey", sub_account_api_key);
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/subAccountApi/ipRestriction", params)
            .await
    }

    /// Delete IPs from a sub-account API key's IP list
    #[instrument(skip(self, sub_account_api_key, params))]
    pub async fn delete_ip_restriction(
        &self,
        email: &str,
        sub_account_api_key: &str,
        ip_address: &str,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        check_required_parameters(&[
            ("email", &email),
            ("subAccountApiKey", &sub_account_api_key),
            ("ipAddress", &ip_address),
        ])?;

        let params = params
            .with("email", email)
            .with("subAccountApiKey", sub_account_api_key)
            .with("ipAddress", ip_address);
        self.client
            .execute(
                Method::DELETE,
                "/sapi/v1/sub-account/subAccountApi/ipRestriction/ipList",
                params,
            )
            .await
    }

    // ========================================================================
    // Managed sub-accounts
    // ========================================================================

    /// Deposit assets into a managed sub-account (investor master account)
    #[instrument(skip(self, amount, params))]
    pub async fn managed_deposit(
        &self,
        to_email: &str,
        asset: &str,
        amount: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let amount = amount.into();
        check_required_parameters(&[("toEmail", &to_email), ("asset", &asset), ("amount", &amount)])?;

        let params = params
            .with("toEmail", to_email)
            .with("asset", asset)
            .with("amount", amount);
        self.client
            .execute(Method::POST, "/sapi/v1/managed-subaccount/deposit", params)
            .await
    }

    /// Managed sub-account asset details
    #[instrument(skip(self, params))]
    pub async fn managed_assets(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/managed-subaccount/asset", params)
            .await
    }

    /// Withdraw assets from a managed sub-account
    ///
    /// Optional: `transferDate` (UTC0 millis) to schedule the withdrawal.
    #[instrument(skip(self, amount, params))]
    pub async fn managed_withdraw(
        &self,
        from_email: &str,
        asset: &str,
        amount: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let amount = amount.into();
        check_required_parameters(&[("fromEmail", &from_email), ("asset", &asset), ("amount", &amount)])?;

        let params = params
            .with("fromEmail", from_email)
            .with("asset", asset)
            .with("amount", amount);
        self.client
            .execute(Method::POST, "/sapi/v1/managed-subaccount/withdraw", params)
            .await
    }

    /// Managed sub-account daily snapshot
    ///
    /// # Arguments
    /// * `email` - Managed sub-account email
    /// * `snapshot_type` - `SnapshotType` or "SPOT" / "MARGIN" / "FUTURES"
    #[instrument(skip(self, snapshot_type, params))]
    pub async fn managed_snapshot(
        &self,
        email: &str,
        snapshot_type: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let snapshot_type = snapshot_type.into();
        check_required_parameters(&[("email", &email), ("type", &snapshot_type)])?;

        let params = params.with("email", email).with("type", snapshot_type);
        self.client
            .execute(Method::GET, "/sapi/v1/managed-subaccount/accountSnapshot", params)
            .await
    }

    /// Managed sub-account transfer log (investor master account)
    #[instrument(skip(self, params))]
    pub async fn managed_investor_transfer_log(
        &self,
        email: &str,
        start_time: i64,
        end_time: i64,
        page: i32,
        limit: i32,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        check_required_parameters(&[
            ("email", &email),
            ("startTime", &start_time),
            ("endTime", &end_time),
            ("page", &page),
            ("limit", &limit),
        ])?;

        let params = transfer_log_window(params, start_time, end_time, page, limit).with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/managed-subaccount/queryTransLogForInvestor", params)
            .await
    }

    /// Managed sub-account transfer log (trading team master account)
    #[instrument(skip(self, params))]
    pub async fn managed_trading_transfer_log(
        &self,
        email: &str,
        start_time: i64,
        end_time: i64,
        page: i32,
        limit: i32,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        check_required_parameters(&[
            ("email", &email),
            ("startTime", &start_time),
            ("endTime", &end_time),
            ("page", &page),
            ("limit", &limit),
        ])?;

        let params = transfer_log_window(params, start_time, end_time, page, limit).with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/managed-subaccount/queryTransLogForTradeParent", params)
            .await
    }

    /// Managed sub-account transfer log (trading team sub-account)
    #[instrument(skip(self, params))]
    pub async fn managed_transfer_log(
        &self,
        start_time: i64,
        end_time: i64,
        page: i32,
        limit: i32,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        check_required_parameters(&[
            ("startTime", &start_time),
            ("endTime", &end_time),
            ("page", &page),
            ("limit", &limit),
        ])?;

        let params = transfer_log_window(params, start_time, end_time, page, limit);
        self.client
            .execute(Method::GET, "/sapi/v1/managed-subaccount/query-trans-log", params)
            .await
    }

    /// Managed sub-account deposit address
    #[instrument(skip(self, params))]
    pub async fn managed_deposit_address(
        &self,
        email: &str,
        coin: &str,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        check_required_parameters(&[("email", &email), ("coin", &coin)])?;

        let params = params.with("email", email).with("coin", coin);
        self.client
            .execute(Method::GET, "/sapi/v1/managed-subaccount/deposit/address", params)
            .await
    }

    /// Managed sub-account list
    #[instrument(skip(self, params))]
    pub async fn managed_list(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/managed-subaccount/info", params)
            .await
    }

    /// Managed sub-account margin asset details
    #[instrument(skip(self, params))]
    pub async fn managed_margin_assets(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/managed-subaccount/marginAsset", params)
            .await
    }

    /// Managed sub-account futures asset details
    #[instrument(skip(self, params))]
    pub async fn managed_futures_assets(&self, email: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(email, "email")?;

        let params = params.with("email", email);
        self.client
            .execute(Method::GET, "/sapi/v1/managed-subaccount/fetch-future-asset", params)
            .await
    }
}

fn transfer_log_window(params: Params, start_time: i64, end_time: i64, page: i32, limit: i32) -> Params {
    params
        .with("startTime", start_time)
        .with("endTime", end_time)
        .with("page", page)
        .with("limit", limit)
}
