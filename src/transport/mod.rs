//! HTTP plumbing: one outbound request per call, no retries.

mod http;

pub use http::{HttpTransport, RawResponse};
