//! Wallet endpoints
//!
//! Balances, deposit and withdrawal history, trade history and the
//! transfer/snapshot queries used to reconcile an account's holdings.

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::params::{ParamValue, Params};
use crate::validation::check_required_parameter;
use reqwest::Method;
use tracing::{debug, instrument};

/// Wallet endpoints
pub struct WalletEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> WalletEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    /// Query wallet balances across all wallets
    ///
    /// Optional: `quoteAsset` valuation currency (default "BTC").
    #[instrument(skip(self, params))]
    pub async fn balance(&self, params: Params) -> RestResult<Vec<u8>> {
        debug!("Getting wallet balance");
        self.client
            .execute(Method::GET, "/sapi/v1/asset/wallet/balance", params)
            .await
    }

    /// Query positive user assets
    ///
    /// Optional: `asset` (all positive assets when absent), `needBtcValuation`.
    #[instrument(skip(self, params))]
    pub async fn user_asset(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::POST, "/sapi/v3/asset/getUserAsset", params)
            .await
    }

    /// Deposit history
    ///
    /// Optional: `coin`, `status` (0 pending, 6 credited, 1 success),
    /// `startTime`, `endTime`, `offset`, `limit`.
    #[instrument(skip(self, params))]
    pub async fn deposit_history(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/capital/deposit/hisrec", params)
            .await
    }

    /// Withdrawal history
    #[instrument(skip(self, params))]
    pub async fn withdrawal_history(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/capital/withdraw/history", params)
            .await
    }

    /// Account trade list for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "BTCUSDT")
    ///
    /// Optional: `startTime`, `endTime`, `orderId`, `fromId`, `limit` (default 500).
    #[instrument(skip(self, params))]
    pub async fn my_trades(&self, symbol: &str, params: Params) -> RestResult<Vec<u8>> {
        check_required_parameter(symbol, "symbol")?;

        debug!("Getting trades for {}", symbol);
        let params = params.with("symbol", symbol);
        self.client
            .execute(Method::GET, "/api/v3/myTrades", params)
            .await
    }

    /// Universal transfer history of the calling account
    ///
    /// # Arguments
    /// * `transfer_type` - `UniversalTransferType` or its string form (e.g., "MAIN_UMFUTURE")
    ///
    /// Optional: `startTime`, `endTime`, `current`, `size`.
    #[instrument(skip(self, transfer_type, params))]
    pub async fn universal_transfer_history(
        &self,
        transfer_type: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let transfer_type = transfer_type.into();
        check_required_parameter(&transfer_type, "type")?;

        let params = params.with("type", transfer_type);
        self.client
            .execute(Method::GET, "/sapi/v1/asset/transfer", params)
            .await
    }

    /// Transfer history of the calling sub-account with its master and siblings
    ///
    /// `type` 1 is a transfer in, 2 a transfer out; see `TransferDirection`.
    #[instrument(skip(self, params))]
    pub async fn sub_account_transfer_history(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/transfer/subUserHistory", params)
            .await
    }

    /// Daily account snapshot
    ///
    /// # Arguments
    /// * `snapshot_type` - `SnapshotType` or "SPOT" / "MARGIN" / "FUTURES"
    ///
    /// Optional: `startTime`, `endTime`, `limit` (7 to 30).
    #[instrument(skip(self, snapshot_type, params))]
    pub async fn account_snapshot(
        &self,
        snapshot_type: impl Into<ParamValue>,
        params: Params,
    ) -> RestResult<Vec<u8>> {
        let snapshot_type = snapshot_type.into();
        check_required_parameter(&snapshot_type, "type")?;

        let params = params.with("type", snapshot_type);
        self.client
            .execute(Method::GET, "/sapi/v1/accountSnapshot", params)
            .await
    }

    /// Transfer history between the master account and its sub-accounts
    #[instrument(skip(self, params))]
    pub async fn master_sub_account_transfer_history(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/universalTransfer", params)
            .await
    }

    /// Sub-accounts of the master account
    #[instrument(skip(self, params))]
    pub async fn master_sub_account_list(&self, params: Params) -> RestResult<Vec<u8>> {
        self.client
            .execute(Method::GET, "/sapi/v1/sub-account/list", params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::transport::MockTransport;
    use binance_auth::Credentials;
    use binance_types::{SnapshotType, UniversalTransferType};
    use std::sync::Arc;

    fn mock_client() -> (BinanceRestClient, Arc<MockTransport>) {
        let credentials = Credentials::new("test_key", "test_secret").unwrap();
        let transport = Arc::new(MockTransport::new());
        let client = BinanceRestClient::with_transport(ClientConfig::new(credentials), transport.clone());
        (client, transport)
    }

    #[tokio::test]
    async fn test_my_trades_requires_symbol() {
        let (client, transport) = mock_client();

        let err = client.wallet().my_trades("", Params::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "required parameter symbol is empty");
        assert_eq!(transport.request_count(), 0);

        client.wallet().my_trades("BTCUSDT", Params::new()).await.unwrap();
        assert_eq!(transport.request_count(), 1);
        assert!(transport
            .last_request()
            .unwrap()
            .url
            .starts_with("https://api.binance.com/api/v3/myTrades?symbol=BTCUSDT&timestamp="));
    }

    #[tokio::test]
    async fn test_user_asset_is_post() {
        let (client, transport) = mock_client();

        client
            .wallet()
            .user_asset(Params::new().with("needBtcValuation", true))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert!(request.url.contains("/sapi/v3/asset/getUserAsset?needBtcValuation=true&"));
    }

    #[tokio::test]
    async fn test_typed_and_string_types_match() {
        let (client, transport) = mock_client();
        let wallet = client.wallet();

        wallet
            .universal_transfer_history(UniversalTransferType::MainUmFuture, Params::new())
            .await
            .unwrap();
        wallet
            .universal_transfer_history("MAIN_UMFUTURE", Params::new())
            .await
            .unwrap();
        wallet.account_snapshot(SnapshotType::Spot, Params::new()).await.unwrap();

        let requests = transport.requests();
        assert!(requests[0].url.contains("type=MAIN_UMFUTURE"));
        assert!(requests[1].url.contains("type=MAIN_UMFUTURE"));
        assert!(requests[2].url.contains("/sapi/v1/accountSnapshot?timestamp="));
        assert!(requests[2].url.contains("&type=SPOT&signature="));
    }

    #[tokio::test]
    async fn test_api_error_body_passed_through() {
        let (client, transport) = mock_client();
        transport.push_response(400, r#"{"code":-1102,"msg":"bad param"}"#);

        let err = client.wallet().balance(Params::new()).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.api_error().unwrap().msg, "bad param");
    }
}
