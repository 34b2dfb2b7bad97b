//! Check credit balance and usage statistics.
//!
//! Usage:
//!   EMAILLISTCHECKER_API_KEY=your_key cargo run --example credits_usage

use emaillistchecker::prelude::*;
use emaillistchecker::types::{Credits, Usage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = EmailListChecker::from_env()?;

    println!("=== Credit Balance ===");
    let credits: Credits = decode(client.get_credits().await?)?;
    println!("Available credits: {}", credits.balance);
    println!("Used this month: {}", credits.used_this_month);
    println!("Current plan: {}\n", credits.plan.as_deref().unwrap_or("-"));

    println!("=== Usage Statistics ===");
    let usage: Usage = decode(client.get_usage().await?)?;
    println!("Total API requests: {}", usage.total_requests);
    println!("Successful requests: {}", usage.successful_requests);
    println!("Failed requests: {}", usage.failed_requests);
    if let Some(rate) = usage.success_rate() {
        println!("Success rate: {:.2}%", rate);
    }

    Ok(())
}
