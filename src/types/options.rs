//! Optional parameters of the public operations, with the service defaults.

use serde_json::Value;
use std::fmt;

/// Largest batch the service accepts in one submission.
pub const MAX_BATCH_SIZE: usize = 10_000;

/// Options for [`verify`](crate::EmailListChecker::verify).
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Verification timeout in seconds (the service accepts 5-60).
    pub timeout: Option<u32>,
    /// Perform the SMTP mailbox check.
    pub smtp_check: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            smtp_check: true,
        }
    }
}

impl VerifyOptions {
    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn smtp_check(mut self, enabled: bool) -> Self {
        self.smtp_check = enabled;
        self
    }
}

/// Options for [`verify_batch`](crate::EmailListChecker::verify_batch).
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub name: Option<String>,
    /// Webhook notified when the batch completes.
    pub callback_url: Option<String>,
    pub auto_start: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            name: None,
            callback_url: None,
            auto_start: true,
        }
    }
}

impl BatchOptions {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }
}

/// Download format of batch results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsFormat {
    #[default]
    Json,
    Csv,
    Txt,
}

impl ResultsFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultsFormat::Json => "json",
            ResultsFormat::Csv => "csv",
            ResultsFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for ResultsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResultsFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ResultsFormat::Json),
            "csv" => Ok(ResultsFormat::Csv),
            "txt" => Ok(ResultsFormat::Txt),
            other => Err(crate::Error::generic(format!(
                "Unknown results format '{}' (expected json, csv or txt)",
                other
            ))),
        }
    }
}

/// Subset of batch results to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsFilter {
    #[default]
    All,
    Valid,
    Invalid,
    Risky,
    Unknown,
}

impl ResultsFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultsFilter::All => "all",
            ResultsFilter::Valid => "valid",
            ResultsFilter::Invalid => "invalid",
            ResultsFilter::Risky => "risky",
            ResultsFilter::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResultsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResultsFilter {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(ResultsFilter::All),
            "valid" => Ok(ResultsFilter::Valid),
            "invalid" => Ok(ResultsFilter::Invalid),
            "risky" => Ok(ResultsFilter::Risky),
            "unknown" => Ok(ResultsFilter::Unknown),
            other => Err(crate::Error::generic(format!(
                "Unknown results filter '{}'",
                other
            ))),
        }
    }
}

/// Options for [`get_batch_results`](crate::EmailListChecker::get_batch_results).
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultsOptions {
    pub format: ResultsFormat,
    pub filter: ResultsFilter,
}

impl ResultsOptions {
    pub fn format(mut self, format: ResultsFormat) -> Self {
        self.format = format;
        self
    }

    pub fn filter(mut self, filter: ResultsFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Batch results as downloaded.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchResults {
    /// `json` format, envelope removed.
    Json(Value),
    /// `csv`/`txt` format, body exactly as received.
    Raw(String),
}

impl BatchResults {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            BatchResults::Json(v) => Some(v),
            BatchResults::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            BatchResults::Json(_) => None,
            BatchResults::Raw(s) => Some(s),
        }
    }
}

/// Options for [`find_by_domain`](crate::EmailListChecker::find_by_domain).
#[derive(Debug, Clone, Copy)]
pub struct DomainSearchOptions {
    /// Results per request (1-100).
    pub limit: u32,
    pub offset: u32,
}

impl Default for DomainSearchOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

impl DomainSearchOptions {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

/// Options for [`find_by_company`](crate::EmailListChecker::find_by_company).
#[derive(Debug, Clone, Copy)]
pub struct CompanySearchOptions {
    /// Results limit (1-100).
    pub limit: u32,
}

impl Default for CompanySearchOptions {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

impl CompanySearchOptions {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}
