//! # emaillistchecker
//!
//! Async Rust client for the EmailListChecker email verification API.
//!
//! ## Overview
//!
//! Every public operation maps onto one remote endpoint and issues exactly one
//! HTTP request. Successful responses are decoded as JSON with the `data`
//! envelope removed; failed responses become one variant of [`Error`], chosen
//! from the HTTP status code.
//!
//! - **Verification**: single addresses and batches of up to 10,000
//! - **Finder**: discover addresses by name, domain or company
//! - **Account**: credit balance, usage statistics and list management
//!
//! The client never retries. A [`Error::RateLimit`] carries the server's
//! `Retry-After` so callers can schedule their own retry.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use emaillistchecker::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> emaillistchecker::Result<()> {
//!     let client = EmailListChecker::new("your-api-key")?;
//!
//!     let result = client
//!         .verify("test@example.com", &VerifyOptions::default())
//!         .await?;
//!     println!("{}", result["result"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, configuration and endpoint operations |
//! | [`error`] | Error taxonomy |
//! | [`transport`] | HTTP plumbing |
//! | [`types`] | Operation options and typed response views |
//! | [`utils`] | Envelope unwrapping |

pub mod client;
pub mod prelude;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use client::{ClientConfig, EmailListChecker, EmailListCheckerBuilder};
pub use types::{
    BatchOptions, BatchResults, CompanySearchOptions, DomainSearchOptions, ResultsFilter,
    ResultsFormat, ResultsOptions, VerifyOptions,
};
pub use utils::unwrap_payload;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ErrorKind};
