//! Find addresses by name, domain and company.
//!
//! Usage:
//!   EMAILLISTCHECKER_API_KEY=your_key cargo run --example email_finder

use emaillistchecker::prelude::*;
use emaillistchecker::types::{CompanySearch, DomainSearch, FoundEmail};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = EmailListChecker::from_env()?;

    println!("=== Find Email by Name ===");
    let found: FoundEmail = decode(client.find_email("John", "Doe", "example.com").await?)?;
    println!("Email found: {}", found.email.as_deref().unwrap_or("-"));
    if let Some(confidence) = found.confidence {
        println!("Confidence: {}%", confidence);
    }
    println!("Pattern: {}", found.pattern.as_deref().unwrap_or("-"));
    println!("Verified: {}", if found.verified { "Yes" } else { "No" });
    if !found.alternatives.is_empty() {
        println!("\nAlternative patterns:");
        for alt in &found.alternatives {
            println!("  - {}", alt);
        }
    }
    println!();

    println!("=== Find Emails by Domain ===");
    let by_domain: DomainSearch = decode(
        client
            .find_by_domain("example.com", &DomainSearchOptions::default())
            .await?,
    )?;
    println!("Domain: {}", by_domain.domain);
    println!("Total found: {}", by_domain.total_found);
    if !by_domain.patterns.is_empty() {
        println!("\nCommon email patterns:");
        for pattern in &by_domain.patterns {
            println!("  - {}", pattern);
        }
    }
    println!("\nFound emails:");
    for email in &by_domain.emails {
        println!(
            "  - {} (Last verified: {})",
            email.email,
            email.last_verified.as_deref().unwrap_or("never")
        );
    }
    println!();

    println!("=== Find Emails by Company ===");
    let by_company: CompanySearch = decode(
        client
            .find_by_company("Acme Corporation", &CompanySearchOptions::default())
            .await?,
    )?;
    println!("Company: {}", by_company.company);
    println!("Total found: {}", by_company.total_found);
    if !by_company.possible_domains.is_empty() {
        println!("\nPossible domains:");
        for domain in &by_company.possible_domains {
            println!("  - {}", domain);
        }
    }
    println!("\nFound emails:");
    for email in &by_company.emails {
        println!(
            "  - {} ({})",
            email.email,
            email.domain.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
