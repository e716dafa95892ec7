//! Demo 1: Wallet Balance
//!
//! Showcases: environment config, signed GET, decoding the raw body
//!
//! Run: cargo run --bin wallet_balance [QUOTE_ASSET]

use binance_demos::{banner, init, parse_json, report_error};
use binance_rest::Params;
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = init()?;
    let quote = std::env::args().nth(1).unwrap_or_else(|| "USDT".to_string());

    banner("WALLET BALANCE", &format!("Valuation in {}", quote));

    let body = match client
        .wallet()
        .balance(Params::new().with("quoteAsset", quote.as_str()))
        .await
    {
        Ok(body) => body,
        Err(e) => {
            report_error("wallet balance", &e);
            return Ok(());
        }
    };

    println!(
        "  {:<24}  {:>18}  {:>10}",
        "WALLET".white().bold(),
        "BALANCE".white().bold(),
        "ACTIVE".white().bold()
    );
    println!("  {}", "─".repeat(56));

    let wallets = parse_json(&body);
    for wallet in wallets.as_array().into_iter().flatten() {
        let name = wallet["walletName"].as_str().unwrap_or("?");
        let balance = wallet["balance"].as_str().unwrap_or("0");
        let active = wallet["activate"].as_bool().unwrap_or(false);

        let balance = if balance.trim_start_matches(['0', '.']).is_empty() {
            balance.dimmed()
        } else {
            balance.green()
        };
        let active = if active { "yes".green() } else { "no".dimmed() };

        println!("  {:<24}  {:>18}  {:>10}", name, balance, active);
    }

    // User assets with a positive balance
    println!();
    match client
        .wallet()
        .user_asset(Params::new().with("needBtcValuation", true))
        .await
    {
        Ok(body) => {
            let assets = parse_json(&body);
            let count = assets.as_array().map_or(0, Vec::len);
            println!("{} {} assets with a positive balance", "✓".green(), count);
            for asset in assets.as_array().into_iter().flatten().take(10) {
                println!(
                    "    {:<8} free {:>16}  ≈ {} BTC",
                    asset["asset"].as_str().unwrap_or("?").yellow(),
                    asset["free"].as_str().unwrap_or("0"),
                    asset["btcValuation"].as_str().unwrap_or("0")
                );
            }
        }
        Err(e) => report_error("user assets", &e),
    }

    Ok(())
}
