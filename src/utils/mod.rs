pub mod envelope;

pub use envelope::unwrap_payload;
