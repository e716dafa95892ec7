//! Shared setup for the demo binaries

use binance_rest::{BinanceRestClient, ClientConfig, RestError};
use colored::*;
use tracing_subscriber::EnvFilter;

/// Load `.env`, install the log subscriber and build a client from the environment
///
/// `RUST_LOG` controls log output (default `info`).
pub fn init() -> Result<BinanceRestClient, RestError> {
    if dotenvy::dotenv().is_err() {
        eprintln!("{} .env file not found, using environment variables", "!".yellow());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    BinanceRestClient::with_config(ClientConfig::from_env()?)
}

/// Print a banner
pub fn banner(title: &str, subtitle: &str) {
    println!("{}", "═".repeat(65).cyan());
    println!("{}", format!("  {}", title).cyan().bold());
    println!("{}", format!("  {}", subtitle).cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();
}

/// Print a request failure, decoding the Binance error body when there is one
pub fn report_error(context: &str, err: &RestError) {
    match err.api_error() {
        Some(api) => println!(
            "{} {}: [{}] {}{}",
            "✗".red(),
            context,
            api.code,
            api.msg,
            api.error_code()
                .map(|code| format!(" ({})", code.description()))
                .unwrap_or_default()
        ),
        None => println!("{} {}: {}", "✗".red(), context, err),
    }
}

/// Parse a raw response body as JSON
pub fn parse_json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap_or(serde_json::Value::Null)
}
