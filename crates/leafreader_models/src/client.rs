use crate::{ChatCompletionRequest, ChatCompletionResponse, VisionDriver};
use leafreader_core::{Completion, VisionRequest};
use leafreader_error::{GatewayError, GatewayErrorKind, GatewayResult};
use tracing::instrument;

/// Connection settings for the upstream gateway.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GatewayConfig {
    /// Full chat-completions URL
    pub url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Bearer credential
    pub api_key: String,
}

impl GatewayConfig {
    /// Create a new gateway configuration
    pub fn new(url: impl Into<String>, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Client for the OpenAI-compatible gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl GatewayClient {
    /// Create a new gateway client
    #[instrument(skip(config), fields(url = %config.url, model = %config.model))]
    pub fn new(config: GatewayConfig) -> Self {
        tracing::debug!("Creating gateway client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> GatewayResult<ChatCompletionResponse> {
        tracing::debug!("Sending chat completion request to {}", self.config.url);

        let response = self
            .client
            .post(&self.config.url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                GatewayError::new(GatewayErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            GatewayError::new(GatewayErrorKind::Transport(e.to_string()))
        })?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %body, "Gateway returned error");
            return Err(GatewayError::new(GatewayErrorKind::status(
                status.as_u16(),
                &body,
            )));
        }

        let result = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            GatewayError::new(GatewayErrorKind::Envelope(e.to_string()))
        })?;

        tracing::debug!("Chat completion successful");
        Ok(result)
    }
}

#[async_trait::async_trait]
impl VisionDriver for GatewayClient {
    #[instrument(skip(self, request), fields(max_tokens = request.sampling().max_tokens))]
    async fn complete(&self, request: &VisionRequest) -> GatewayResult<Completion> {
        let chat_request = ChatCompletionRequest::vision(self.config.model.clone(), request);
        let response = self.chat_completion(&chat_request).await?;

        Ok(Completion {
            content: response.first_content().to_string(),
            finish_reason: response.first_finish_reason().map(str::to_string),
            model: response.model,
        })
    }

    fn provider_name(&self) -> &'static str {
        "ai-gateway"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
