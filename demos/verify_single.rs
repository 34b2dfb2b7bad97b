//! Verify a single email address.
//!
//! API keys are configured via environment variables:
//! - EMAILLISTCHECKER_API_KEY
//!
//! Usage:
//!   EMAILLISTCHECKER_API_KEY=your_key cargo run --example verify_single

use emaillistchecker::prelude::*;
use emaillistchecker::types::VerificationResult;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = EmailListChecker::from_env()?;

    println!("Verifying email...");
    let payload = match client
        .verify("test@example.com", &VerifyOptions::default())
        .await
    {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(status) = e.status_code() {
                eprintln!("Status Code: {}", status);
            }
            return Ok(());
        }
    };
    let result: VerificationResult = decode(payload)?;

    println!("\n=== Verification Result ===");
    println!("Email: {}", result.email);
    println!("Result: {}", result.result);
    println!("Reason: {}", result.reason.as_deref().unwrap_or("-"));
    if let Some(score) = result.score {
        println!("Score: {}", score);
    }

    println!("\n=== Email Details ===");
    println!("Disposable: {}", yes_no(result.disposable));
    println!("Role-based: {}", yes_no(result.role));
    println!("Free provider: {}", yes_no(result.free));
    println!(
        "SMTP Provider: {}",
        result.smtp_provider.as_deref().unwrap_or("-")
    );
    println!("Domain: {}", result.domain.as_deref().unwrap_or("-"));

    if !result.mx_records.is_empty() {
        println!("\nMX Records:");
        for mx in &result.mx_records {
            println!("  - {}", mx);
        }
    }

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
