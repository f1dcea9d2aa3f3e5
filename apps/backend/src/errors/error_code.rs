//! Error codes for the survey platform APIs.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and appears verbatim in problem-details bodies.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Username/password pair rejected
    InvalidCredentials,
    /// No token supplied to the validation endpoint
    MissingToken,
    /// Token failed signature, structure or expiry checks
    InvalidToken,
    /// Caller's role does not permit the operation
    Forbidden,

    // Request Validation
    /// Body could not be parsed into the expected shape
    MalformedRequest,
    /// Survey id path segment is not a positive integer
    InvalidSurveyId,

    // Resource Not Found
    SurveyNotFound,
    NotFound,

    // System Errors
    /// Durable store operation failed
    StoreError,
    /// Durable store unreachable or pool exhausted
    StoreUnavailable,
    /// Stored data could not be interpreted
    DataCorruption,
    /// Auth service could not be reached
    AuthUpstreamUnavailable,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    /// Canonical string for this code, as it appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Forbidden => "FORBIDDEN",

            Self::MalformedRequest => "MALFORMED_REQUEST",
            Self::InvalidSurveyId => "INVALID_SURVEY_ID",

            Self::SurveyNotFound => "SURVEY_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::StoreError => "STORE_ERROR",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::AuthUpstreamUnavailable => "AUTH_UPSTREAM_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
