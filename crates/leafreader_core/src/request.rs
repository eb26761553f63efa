//! Request and response types exchanged with the upstream model.

/// Finish reason reported when the upstream gives none.
pub const UNKNOWN_FINISH_REASON: &str = "unknown";

/// Fixed sampling configuration of one endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Sampling {
    /// Create a sampling configuration.
    pub const fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

/// One stateless vision request: instructions, a task line and a screenshot.
///
/// # Examples
///
/// ```
/// use leafreader_core::{Sampling, VisionRequest};
///
/// let request = VisionRequest::new(
///     "You are a text detector.",
///     "Is there text?",
///     "data:image/jpeg;base64,aGk=",
///     Sampling::new(5, 0.0),
/// );
///
/// assert_eq!(request.sampling().max_tokens, 5);
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct VisionRequest {
    /// Endpoint persona and rules
    system_prompt: String,
    /// Task-specific instruction, with caller text interpolated where applicable
    instruction: String,
    /// Normalized image data URI
    image_url: String,
    /// Sampling configuration
    sampling: Sampling,
}

impl VisionRequest {
    /// Create a vision request.
    pub fn new(
        system_prompt: impl Into<String>,
        instruction: impl Into<String>,
        image_url: impl Into<String>,
        sampling: Sampling,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            instruction: instruction.into(),
            image_url: image_url.into(),
            sampling,
        }
    }
}

/// What the upstream model answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Content of the first choice, empty when absent
    pub content: String,
    /// Finish reason of the first choice
    pub finish_reason: Option<String>,
    /// Model identifier reported by the upstream
    pub model: Option<String>,
}

impl Completion {
    /// A completion carrying only content.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// The finish reason, or [`UNKNOWN_FINISH_REASON`] when absent or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use leafreader_core::Completion;
    ///
    /// let mut completion = Completion::from_content("Go to the museum.");
    /// assert_eq!(completion.finish_reason_or_unknown(), "unknown");
    ///
    /// completion.finish_reason = Some("length".to_string());
    /// assert_eq!(completion.finish_reason_or_unknown(), "length");
    /// ```
    pub fn finish_reason_or_unknown(&self) -> &str {
        self.finish_reason
            .as_deref()
            .filter(|reason| !reason.is_empty())
            .unwrap_or(UNKNOWN_FINISH_REASON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_finish_reason_is_unknown() {
        let completion = Completion {
            finish_reason: Some(String::new()),
            ..Completion::from_content("text")
        };
        assert_eq!(completion.finish_reason_or_unknown(), UNKNOWN_FINISH_REASON);
    }
}
