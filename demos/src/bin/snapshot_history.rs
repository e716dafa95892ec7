//! Demo 3: Snapshot and Transfer History
//!
//! Showcases: typed enum parameters, time windows in milliseconds,
//! transfer direction codes
//!
//! Run: cargo run --bin snapshot_history [DAYS]

use binance_demos::{banner, init, parse_json, report_error};
use binance_rest::Params;
use binance_types::{SnapshotType, TransferDirection, UniversalTransferType};
use chrono::{Duration, TimeZone, Utc};
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = init()?;
    let days: i64 = std::env::args()
        .nth(1)
        .and_then(|d| d.parse().ok())
        .unwrap_or(7)
        .clamp(1, 30);

    banner("SNAPSHOT HISTORY", &format!("Last {} days", days));

    let end = Utc::now();
    let start = end - Duration::days(days);
    let window = Params::new()
        .with("startTime", start.timestamp_millis())
        .with("endTime", end.timestamp_millis());

    // Daily spot snapshots
    match client
        .wallet()
        .account_snapshot(SnapshotType::Spot, window.clone().with("limit", 30))
        .await
    {
        Ok(body) => {
            let snapshots = parse_json(&body);
            for snapshot in snapshots["snapshotVos"].as_array().into_iter().flatten() {
                let day = snapshot["updateTime"]
                    .as_i64()
                    .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                println!(
                    "  {}  total ≈ {} BTC",
                    day.cyan(),
                    snapshot["data"]["totalAssetOfBtc"].as_str().unwrap_or("0").green()
                );
            }
        }
        Err(e) => report_error("account snapshot", &e),
    }

    // Spot to USDT-M futures transfers
    println!();
    match client
        .wallet()
        .universal_transfer_history(UniversalTransferType::MainUmFuture, window.clone())
        .await
    {
        Ok(body) => {
            let history = parse_json(&body);
            println!(
                "{} {} {} transfers",
                "✓".green(),
                history["total"].as_i64().unwrap_or(0),
                UniversalTransferType::MainUmFuture
            );
        }
        Err(e) => report_error("universal transfer history", &e),
    }

    // Incoming sub-account transfers
    match client
        .wallet()
        .sub_account_transfer_history(window.with("type", TransferDirection::In))
        .await
    {
        Ok(body) => {
            let transfers = parse_json(&body);
            for transfer in transfers.as_array().into_iter().flatten() {
                println!(
                    "  IN  {:>16} {:<6} from {}",
                    transfer["qty"].as_str().unwrap_or("0").green(),
                    transfer["asset"].as_str().unwrap_or("?"),
                    transfer["counterParty"].as_str().unwrap_or("?")
                );
            }
        }
        Err(e) => report_error("sub-account transfer history", &e),
    }

    Ok(())
}
