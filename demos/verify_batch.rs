//! Submit a batch, poll until it finishes, then download the results.
//!
//! Polling is the caller's job: this demo checks every 2 seconds and backs
//! off only when the service answers with a rate-limit error.
//!
//! Usage:
//!   EMAILLISTCHECKER_API_KEY=your_key cargo run --example verify_batch

use emaillistchecker::prelude::*;
use emaillistchecker::types::{BatchResultEntry, BatchStatus};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = EmailListChecker::from_env()?;

    let emails = [
        "user1@example.com",
        "user2@example.com",
        "user3@example.com",
        "invalid@invalid-domain-xyz.com",
        "test@gmail.com",
    ];

    println!("Submitting batch of {} emails...", emails.len());
    let batch: BatchStatus = decode(
        client
            .verify_batch(&emails, &BatchOptions::default().name("My Test Batch"))
            .await?,
    )?;
    let batch_id = match &batch.id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    println!("Batch submitted successfully!");
    println!("Batch ID: {}", batch_id);
    println!("Status: {}", batch.status);
    println!("Total emails: {}\n", batch.total_emails);

    println!("Monitoring progress...");
    let mut previous_progress = 0.0;
    let final_status = loop {
        let status: BatchStatus = match client.get_batch_status(&batch_id).await {
            Ok(payload) => decode(payload)?,
            Err(Error::RateLimit {
                retry_after_secs, ..
            }) => {
                tokio::time::sleep(Duration::from_secs(retry_after_secs)).await;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if status.progress != previous_progress {
            println!(
                "Progress: {}% ({}/{} processed)",
                status.progress, status.processed_emails, status.total_emails
            );
            previous_progress = status.progress;
        }

        if status.is_completed() {
            println!("\nBatch verification completed!\n");
            break status;
        }
        if status.is_failed() {
            println!("\nBatch verification failed!");
            std::process::exit(1);
        }

        tokio::time::sleep(POLL_INTERVAL).await;
    };

    println!("=== Final Statistics ===");
    println!("Total: {}", final_status.total_emails);
    println!("Valid: {}", final_status.valid_emails);
    println!("Invalid: {}", final_status.invalid_emails);
    println!("Unknown: {}\n", final_status.unknown_emails);

    println!("Downloading results...");
    let results = client
        .get_batch_results(&batch_id, &ResultsOptions::default())
        .await?;

    println!("\n=== Results ===");
    if let BatchResults::Json(payload) = results {
        let entries: Vec<BatchResultEntry> = decode(payload)?;
        for entry in entries {
            let mark = match entry.result.as_str() {
                "deliverable" => "✓",
                "undeliverable" => "✗",
                "risky" => "⚠",
                _ => "?",
            };
            println!(
                "{} {}: {} ({})",
                mark,
                entry.email,
                entry.result,
                entry.reason.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}
