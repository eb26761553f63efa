//! Upstream model integration for leafreader.
//!
//! The service talks to one OpenAI-compatible chat-completions gateway. This
//! crate holds:
//!
//! - **`VisionDriver`**: the seam handlers call through, so tests can swap in a mock
//! - **`GatewayClient`**: the reqwest implementation of it
//! - **Wire types**: the chat-completion request/response envelopes
//!
//! # Example
//!
//! ```rust,no_run
//! use leafreader_core::{Sampling, VisionRequest};
//! use leafreader_models::{GatewayClient, GatewayConfig, VisionDriver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GatewayConfig::new(
//!         "https://ai-gateway.vercel.sh/v1/chat/completions",
//!         "google/gemini-3-flash",
//!         std::env::var("AI_GATEWAY_API_KEY")?,
//!     );
//!     let client = GatewayClient::new(config);
//!
//!     let request = VisionRequest::new(
//!         "Reply with YES or NO.",
//!         "Is there readable text?",
//!         "data:image/jpeg;base64,...",
//!         Sampling::new(5, 0.0),
//!     );
//!
//!     let completion = client.complete(&request).await?;
//!     println!("{}", completion.content);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod driver;
mod wire;

pub use client::{GatewayClient, GatewayConfig};
pub use driver::VisionDriver;
pub use wire::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, ContentPart, ImageUrl,
    Message, MessageContent,
};
