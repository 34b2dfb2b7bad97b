use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Response details attached to a failed call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// HTTP status of the response, absent for transport and configuration failures.
    pub status_code: Option<u16>,
    /// Decoded error body as returned by the service (non-JSON bodies are kept as a string).
    pub raw_body: Option<Value>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status_code(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    pub fn with_raw_body(mut self, body: Option<Value>) -> Self {
        self.raw_body = body;
        self
    }
}

/// Discriminant of [`Error`], handy for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Generic,
    Authentication,
    InsufficientCredits,
    RateLimit,
    Validation,
    Api,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Generic => "generic",
            ErrorKind::Authentication => "authentication",
            ErrorKind::InsufficientCredits => "insufficient_credits",
            ErrorKind::RateLimit => "rate_limit",
            ErrorKind::Validation => "validation",
            ErrorKind::Api => "api_error",
        }
    }
}

/// Every failure the client can report.
///
/// Exactly one variant is produced per failed call. HTTP failures are chosen
/// from the response status alone; transport failures, timeouts and bad local
/// configuration are `Generic` with no status code.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure, timeout, undecodable body or invalid configuration.
    #[error("{message}")]
    Generic {
        message: String,
        context: ErrorContext,
    },

    /// HTTP 401.
    #[error("{message}")]
    Authentication {
        message: String,
        context: ErrorContext,
    },

    /// HTTP 402.
    #[error("{message}")]
    InsufficientCredits {
        message: String,
        context: ErrorContext,
    },

    /// HTTP 429. `retry_after_secs` comes from the `Retry-After` header (60 when missing).
    #[error("{message}")]
    RateLimit {
        message: String,
        retry_after_secs: u64,
        context: ErrorContext,
    },

    /// HTTP 422.
    #[error("{message}")]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// Any other non-2xx status.
    #[error("{message}")]
    Api {
        message: String,
        context: ErrorContext,
    },
}

impl Error {
    /// A `Generic` error with no response attached.
    pub fn generic(msg: impl Into<String>) -> Self {
        Error::Generic {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Generic { .. } => ErrorKind::Generic,
            Error::Authentication { .. } => ErrorKind::Authentication,
            Error::InsufficientCredits { .. } => ErrorKind::InsufficientCredits,
            Error::RateLimit { .. } => ErrorKind::RateLimit,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Api { .. } => ErrorKind::Api,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Generic { message, .. }
            | Error::Authentication { message, .. }
            | Error::InsufficientCredits { message, .. }
            | Error::RateLimit { message, .. }
            | Error::Validation { message, .. }
            | Error::Api { message, .. } => message,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Error::Generic { context, .. }
            | Error::Authentication { context, .. }
            | Error::InsufficientCredits { context, .. }
            | Error::RateLimit { context, .. }
            | Error::Validation { context, .. }
            | Error::Api { context, .. } => context,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.context().status_code
    }

    pub fn raw_body(&self) -> Option<&Value> {
        self.context().raw_body.as_ref()
    }

    /// Suggested wait before retrying; only rate-limit errors carry one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimit {
                retry_after_secs, ..
            } => Some(Duration::from_secs(*retry_after_secs)),
            _ => None,
        }
    }

    /// Whether repeating the same call later may succeed.
    ///
    /// Informational only: the client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimit { .. } => true,
            Error::Api { context, .. } => matches!(context.status_code, Some(500..=599)),
            _ => false,
        }
    }
}
