//! The API client.
//!
//! Implementation details are split into submodules under `src/client/`:
//! configuration, the dispatcher, status classification and one file per
//! group of endpoints.

pub mod builder;
pub mod config;
pub mod core;
pub mod error_classification;

mod account;
mod finder;
mod verify;

pub use builder::EmailListCheckerBuilder;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};
pub use core::EmailListChecker;
pub use error_classification::DEFAULT_RETRY_AFTER_SECS;
