//! HTTP routes.

use crate::{ENDPOINTS, Endpoint, ErrorResponse, pipeline};
use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use leafreader_error::{RequestError, RequestErrorKind};
use leafreader_models::VisionDriver;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    driver: Option<Arc<dyn VisionDriver>>,
}

impl AppState {
    /// State backed by `driver`.
    pub fn new(driver: Arc<dyn VisionDriver>) -> Self {
        Self {
            driver: Some(driver),
        }
    }

    /// State for a deployment with no upstream credential.
    pub fn unconfigured() -> Self {
        Self { driver: None }
    }

    /// The upstream driver, if a credential was configured.
    pub fn driver(&self) -> Option<&dyn VisionDriver> {
        self.driver.as_deref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("model", &self.driver().map(|driver| driver.model_name()))
            .finish()
    }
}

/// Build the router: one POST route per endpoint plus `/health`.
pub fn create_router(state: AppState, body_limit: usize) -> Router {
    ENDPOINTS
        .into_iter()
        .fold(
            Router::new().route("/health", get(health_check)),
            |router, endpoint| {
                router.route(
                    endpoint.path,
                    post(
                        move |State(state): State<AppState>,
                              body: Result<Bytes, BytesRejection>| async move {
                            handle(&state, &endpoint, body).await
                        },
                    )
                    .fallback(method_not_allowed),
                )
            },
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

async fn handle(
    state: &AppState,
    endpoint: &Endpoint,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match &body {
        Ok(bytes) => Ok(bytes.as_ref()),
        Err(rejection) => Err(rejected_body(rejection)),
    };
    match pipeline::run(state, endpoint, body).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(err) => ErrorResponse::new(err, endpoint.diagnostics).into_response(),
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Map a body extraction failure onto a request error.
fn rejected_body(rejection: &BytesRejection) -> RequestError {
    debug!(error = %rejection, "Request body rejected");
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        RequestError::new(RequestErrorKind::PayloadTooLarge)
    } else {
        RequestError::new(RequestErrorKind::UnreadableBody)
    }
}

async fn method_not_allowed() -> ErrorResponse {
    ErrorResponse::new(RequestError::new(RequestErrorKind::MethodNotAllowed).into(), false)
}
