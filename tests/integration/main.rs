//! Integration tests against a mock HTTP server.
//!
//! Run with: cargo test --test integration

mod mock_server;
mod operations;
