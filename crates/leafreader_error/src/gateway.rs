//! Error types for the upstream model gateway.

/// Maximum number of characters of an upstream error body kept for diagnostics.
pub const DETAIL_LIMIT: usize = 500;

/// Why an upstream call produced no usable content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GatewayErrorKind {
    /// The gateway answered with a non-success status
    #[display("Gateway returned status {}: {}", status, detail)]
    Status {
        /// HTTP status code returned by the gateway
        status: u16,
        /// Leading part of the response body
        detail: String,
    },

    /// The request never completed (connection, TLS, body read)
    #[display("Gateway transport failed: {}", _0)]
    Transport(String),

    /// The body was not a chat-completion envelope
    #[display("Failed to parse gateway response: {}", _0)]
    Envelope(String),
}

impl GatewayErrorKind {
    /// Build a `Status` kind, keeping at most [`DETAIL_LIMIT`] characters of `body`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leafreader_error::{DETAIL_LIMIT, GatewayErrorKind};
    ///
    /// let kind = GatewayErrorKind::status(503, "x".repeat(2000));
    /// match kind {
    ///     GatewayErrorKind::Status { status, detail } => {
    ///         assert_eq!(status, 503);
    ///         assert_eq!(detail.chars().count(), DETAIL_LIMIT);
    ///     }
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn status(status: u16, body: impl AsRef<str>) -> Self {
        Self::Status {
            status,
            detail: body.as_ref().chars().take(DETAIL_LIMIT).collect(),
        }
    }
}

/// Gateway error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The error kind
    pub kind: GatewayErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GatewayErrorKind {
        &self.kind
    }
}

/// Result type for gateway calls.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
