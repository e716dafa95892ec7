//! Demo 4: Signed Request Preview
//!
//! Showcases: canonical query strings and HMAC-SHA256 signatures, offline.
//! Nothing is sent; the demo prints what would go on the wire.
//!
//! Run: cargo run --bin sign_preview

use binance_rest::{BinanceRestClient, Credentials, Method, Params};
use colored::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::from_env().or_else(|_| Credentials::new("demo_key", "demo_secret"))?;
    let client = BinanceRestClient::new(credentials)?;

    println!("{}", "SIGNED REQUEST PREVIEW".cyan().bold());
    println!("API key: {}\n", client.api_key().yellow());

    let timestamp = chrono::Utc::now().timestamp_millis();
    let samples = [
        (
            Method::GET,
            "/sapi/v1/sub-account/list",
            Params::new().with("page", 1).with("limit", 10),
        ),
        (
            Method::POST,
            "/sapi/v1/sub-account/transfer/subToMaster",
            Params::new().with("asset", "BTC").with("amount", 1.5),
        ),
        (
            Method::GET,
            "/sapi/v1/capital/deposit/hisrec",
            Params::new().with("coin", "").with("status", 0),
        ),
    ];

    for (method, path, params) in samples {
        let request = client.sign_request(method, path, params, timestamp)?;
        println!("{} {}", request.method.to_string().green().bold(), path);
        println!("  query     {}", request.query().unwrap_or_default());
        println!("  signature {}", request.signature().unwrap_or_default().dimmed());
        println!();
    }

    Ok(())
}
