//! OpenAI-compatible chat-completion envelopes.

use leafreader_core::VisionRequest;
use serde::{Deserialize, Serialize};

/// Chat completion request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Temperature for sampling
    pub temperature: f32,
}

impl ChatCompletionRequest {
    /// The two-message request for a vision task: system instructions, then
    /// the user turn carrying the task line and the image.
    pub fn vision(model: impl Into<String>, request: &VisionRequest) -> Self {
        let sampling = request.sampling();
        Self {
            model: model.into(),
            messages: vec![
                Message::system(request.system_prompt().clone()),
                Message::user_with_image(request.instruction().clone(), request.image_url().clone()),
            ],
            max_tokens: sampling.max_tokens,
            temperature: sampling.temperature,
        }
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct Message {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Message content
    pub content: MessageContent,
}

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create a user message with a text part followed by an image part
    pub fn user_with_image(text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_url.into(),
                    },
                },
            ]),
        }
    }
}

/// Plain string content or a list of typed parts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text
    Text(String),
    /// Multimodal parts
    Parts(Vec<ContentPart>),
}

/// One part of a multimodal message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text part
    Text {
        /// The text
        text: String,
    },
    /// Image reference part
    ImageUrl {
        /// The image reference
        image_url: ImageUrl,
    },
}

/// Image reference; data URIs are accepted by the gateway.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct ImageUrl {
    /// URL or data URI
    pub url: String,
}

/// Chat completion response body.
///
/// Every field is optional and may be `null`: a body missing content still
/// decodes, and the content is then treated as empty.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    /// Model used for completion
    #[serde(default)]
    pub model: Option<String>,
    /// Generated completions
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, empty when absent.
    pub fn first_content(&self) -> &str {
        self.first_choice()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .unwrap_or_default()
    }

    /// Finish reason of the first choice.
    pub fn first_finish_reason(&self) -> Option<&str> {
        self.first_choice()
            .and_then(|choice| choice.finish_reason.as_deref())
    }

    fn first_choice(&self) -> Option<&Choice> {
        self.choices.as_deref().and_then(<[Choice]>::first)
    }
}

/// A completion choice
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq, Hash)]
pub struct Choice {
    /// The generated message
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    /// Reason why generation finished
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message in a choice
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq, Hash)]
pub struct ChoiceMessage {
    /// Role of the message (typically "assistant")
    #[serde(default)]
    pub role: Option<String>,
    /// Generated content
    #[serde(default)]
    pub content: Option<String>,
}
