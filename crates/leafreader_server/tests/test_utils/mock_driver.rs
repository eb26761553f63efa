//! Mock upstream driver for handler tests.

use async_trait::async_trait;
use leafreader_core::{Completion, VisionRequest};
use leafreader_error::{GatewayError, GatewayErrorKind, GatewayResult};
use leafreader_models::VisionDriver;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// A driver that answers every call with the same canned outcome.
#[derive(Debug)]
pub struct MockDriver {
    outcome: Result<Completion, GatewayErrorKind>,
    calls: AtomicUsize,
    last_request: Mutex<Option<VisionRequest>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// Answer with `content` and a `stop` finish reason.
    pub fn replying(content: &str) -> Self {
        Self::with_completion(Completion {
            content: content.to_string(),
            finish_reason: Some("stop".to_string()),
            model: Some("mock-vision".to_string()),
        })
    }

    /// Answer with a full completion.
    pub fn with_completion(completion: Completion) -> Self {
        Self {
            outcome: Ok(completion),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Fail every call with `kind`.
    pub fn failing(kind: GatewayErrorKind) -> Self {
        Self {
            outcome: Err(kind),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of upstream calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<VisionRequest> {
        self.last_request.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl VisionDriver for MockDriver {
    async fn complete(&self, request: &VisionRequest) -> GatewayResult<Completion> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().expect("lock poisoned") = Some(request.clone());
        self.outcome.clone().map_err(GatewayError::new)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-vision"
    }
}
