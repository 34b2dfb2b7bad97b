pub mod models;
pub mod options;

pub use models::{
    decode, BatchResultEntry, BatchStatus, CompanySearch, Credits, DiscoveredEmail,
    DomainSearch, FoundEmail, Usage, VerificationResult,
};
pub use options::{
    BatchOptions, BatchResults, CompanySearchOptions, DomainSearchOptions, ResultsFilter,
    ResultsFormat, ResultsOptions, VerifyOptions, MAX_BATCH_SIZE,
};
