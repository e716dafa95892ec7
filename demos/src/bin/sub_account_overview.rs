//! Demo 2: Sub-account Overview
//!
//! Showcases: paging through sub-accounts, per-account asset queries,
//! required-parameter validation
//!
//! Run: cargo run --bin sub_account_overview

use binance_demos::{banner, init, parse_json, report_error};
use binance_rest::Params;
use colored::*;

const PAGE_SIZE: i32 = 50;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = init()?;
    let sub = client.sub_account();

    banner("SUB-ACCOUNT OVERVIEW", "Master account view of every sub-account");

    let mut emails = Vec::new();
    let mut page = 1;
    loop {
        let body = match sub
            .list(Params::new().with("page", page).with("limit", PAGE_SIZE))
            .await
        {
            Ok(body) => body,
            Err(e) => {
                report_error("sub-account list", &e);
                return Ok(());
            }
        };

        let list = parse_json(&body);
        let accounts = list["subAccounts"].as_array().cloned().unwrap_or_default();
        for account in &accounts {
            let email = account["email"].as_str().unwrap_or_default().to_string();
            let frozen = account["isFreeze"].as_bool().unwrap_or(false);
            let managed = account["isManagedSubAccount"].as_bool().unwrap_or(false);

            println!(
                "  {:<40} {} {}",
                email.cyan(),
                if frozen { "FROZEN".red() } else { "active".green() },
                if managed { "managed".yellow() } else { "".normal() }
            );
            emails.push(email);
        }

        if accounts.len() < PAGE_SIZE as usize {
            break;
        }
        page += 1;
    }

    println!();
    println!("{} {} sub-accounts found", "✓".green(), emails.len());

    for email in &emails {
        println!("\n{} {}", "▸".cyan(), email.bold());
        match sub.assets(email, Params::new()).await {
            Ok(body) => {
                let assets = parse_json(&body);
                let balances = assets["balances"].as_array().cloned().unwrap_or_default();
                if balances.is_empty() {
                    println!("    {}", "no balances".dimmed());
                }
                for balance in balances {
                    println!(
                        "    {:<8} free {:>16}  locked {:>16}",
                        balance["asset"].as_str().unwrap_or("?").yellow(),
                        balance["free"].to_string(),
                        balance["locked"].to_string()
                    );
                }
            }
            Err(e) => report_error("assets", &e),
        }
    }

    // An empty email is rejected before any request is sent
    println!();
    if let Err(e) = sub.assets("", Params::new()).await {
        println!("{} local validation: {}", "✓".green(), e);
    }

    Ok(())
}
