//! Minimal prelude for application code.

pub use crate::client::{EmailListChecker, EmailListCheckerBuilder};
pub use crate::error::{Error, ErrorKind};
pub use crate::types::models::decode;
pub use crate::types::{
    BatchOptions, BatchResults, CompanySearchOptions, DomainSearchOptions, ResultsFilter,
    ResultsFormat, ResultsOptions, VerifyOptions,
};
