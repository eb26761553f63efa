//! Inbound image payloads.

/// Prefix applied to bare base64 payloads.
pub const DEFAULT_IMAGE_PREFIX: &str = "data:image/jpeg;base64,";

/// A non-empty image string, either a data URI or bare base64.
///
/// No format or size validation is done beyond non-emptiness.
///
/// # Examples
///
/// ```
/// use leafreader_core::ImagePayload;
///
/// let bare = ImagePayload::parse("aGVsbG8=").unwrap();
/// assert_eq!(bare.data_uri(), "data:image/jpeg;base64,aGVsbG8=");
///
/// let uri = ImagePayload::parse("data:image/png;base64,aGVsbG8=").unwrap();
/// assert_eq!(uri.data_uri(), "data:image/png;base64,aGVsbG8=");
///
/// assert!(ImagePayload::parse("").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Wrap `raw`, or `None` if it is empty.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    /// Whether the client already sent a `data:` URI.
    pub fn is_data_uri(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// The URI handed to the upstream model.
    pub fn data_uri(&self) -> String {
        if self.is_data_uri() {
            self.0.clone()
        } else {
            format!("{DEFAULT_IMAGE_PREFIX}{}", self.0)
        }
    }
}
