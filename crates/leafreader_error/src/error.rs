//! Top-level error wrapper types.

use crate::{ConfigError, GatewayError, RequestError};

/// Every failure a request can end in.
///
/// # Examples
///
/// ```
/// use leafreader_error::{ConfigError, LeafreaderError, LeafreaderErrorKind};
///
/// let err: LeafreaderError = ConfigError::new("missing key").into();
/// assert!(matches!(err.kind(), LeafreaderErrorKind::Config(_)));
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LeafreaderErrorKind {
    /// Rejected inbound request
    #[from(RequestError)]
    Request(RequestError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Upstream gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
}

/// Leafreader error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Leafreader Error: {}", _0)]
pub struct LeafreaderError(Box<LeafreaderErrorKind>);

impl LeafreaderError {
    /// Create a new error from a kind.
    pub fn new(kind: LeafreaderErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LeafreaderErrorKind {
        &self.0
    }
}

impl<T> From<T> for LeafreaderError
where
    T: Into<LeafreaderErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for leafreader operations.
pub type LeafreaderResult<T> = std::result::Result<T, LeafreaderError>;
