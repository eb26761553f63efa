//! The driver seam between handlers and the upstream model.

use leafreader_core::{Completion, VisionRequest};
use leafreader_error::GatewayResult;

/// Sends one vision request upstream and reports what came back.
///
/// Implementations make exactly one attempt: no retry, no caching.
#[async_trait::async_trait]
pub trait VisionDriver: Send + Sync {
    /// Run a single completion for `request`.
    async fn complete(&self, request: &VisionRequest) -> GatewayResult<Completion>;

    /// Provider identifier for logs.
    fn provider_name(&self) -> &'static str;

    /// Model identifier requests are sent to.
    fn model_name(&self) -> &str;
}
