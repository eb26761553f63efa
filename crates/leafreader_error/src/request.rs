//! Client-input errors.

/// Inbound request rejections. None of these reach the upstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// Only POST is accepted
    #[display("Method not allowed")]
    MethodNotAllowed,

    /// `image` absent, empty, or not a string
    #[display("Missing image data")]
    MissingImage,

    /// `image` or `text` absent, empty, or not a string
    #[display("Missing image or text data")]
    MissingImageOrText,

    /// Body exceeds the configured limit
    #[display("Request body too large")]
    PayloadTooLarge,

    /// Body could not be read
    #[display("Invalid request body")]
    UnreadableBody,
}

/// Request error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The error kind
    pub kind: RequestErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> RequestErrorKind {
        self.kind
    }
}
