//! Mapping pipeline outcomes to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use leafreader_error::{GatewayErrorKind, LeafreaderError, LeafreaderErrorKind, RequestErrorKind};
use serde_json::{Value, json};

/// A failure rendered as `{error, debug?}`.
#[derive(Debug)]
pub struct ErrorResponse {
    error: LeafreaderError,
    diagnostics: bool,
}

impl ErrorResponse {
    /// Render `error`, with a `debug` object when `diagnostics` is set and there is detail to show.
    pub fn new(error: LeafreaderError, diagnostics: bool) -> Self {
        Self { error, diagnostics }
    }

    /// Status code for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.error.kind() {
            LeafreaderErrorKind::Request(err) => match err.kind() {
                RequestErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
                RequestErrorKind::MissingImage
                | RequestErrorKind::MissingImageOrText
                | RequestErrorKind::UnreadableBody => StatusCode::BAD_REQUEST,
                RequestErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            },
            LeafreaderErrorKind::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LeafreaderErrorKind::Gateway(err) => match err.kind() {
                GatewayErrorKind::Status { .. } => StatusCode::BAD_GATEWAY,
                GatewayErrorKind::Transport(_) | GatewayErrorKind::Envelope(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// JSON body for the wrapped error.
    pub fn body(&self) -> Value {
        let (message, debug) = match self.error.kind() {
            LeafreaderErrorKind::Request(err) => (err.kind().to_string(), None),
            LeafreaderErrorKind::Config(_) => ("Server configuration error".to_string(), None),
            LeafreaderErrorKind::Gateway(err) => match err.kind() {
                GatewayErrorKind::Status { status, detail } => (
                    "AI service unavailable".to_string(),
                    Some(json!({ "status": status, "detail": detail })),
                ),
                GatewayErrorKind::Transport(message) | GatewayErrorKind::Envelope(message) => (
                    "Internal server error".to_string(),
                    Some(json!({ "message": message })),
                ),
            },
        };

        match debug.filter(|_| self.diagnostics) {
            Some(debug) => json!({ "error": message, "debug": debug }),
            None => json!({ "error": message }),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafreader_error::{ConfigError, GatewayError, RequestError};

    fn render(error: impl Into<LeafreaderError>, diagnostics: bool) -> (StatusCode, Value) {
        let response = ErrorResponse::new(error.into(), diagnostics);
        (response.status(), response.body())
    }

    #[test]
    fn test_client_errors() {
        let (status, body) = render(RequestError::new(RequestErrorKind::MethodNotAllowed), true);
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"error": "Method not allowed"}));

        let (status, body) = render(RequestError::new(RequestErrorKind::MissingImageOrText), true);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing image or text data"}));

        let (status, body) = render(RequestError::new(RequestErrorKind::PayloadTooLarge), true);
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body, json!({"error": "Request body too large"}));
    }

    #[test]
    fn test_configuration_error_hides_detail() {
        let (status, body) = render(ConfigError::new("AI_GATEWAY_API_KEY not configured"), true);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Server configuration error"}));
    }

    #[test]
    fn test_upstream_status() {
        let error = GatewayError::new(GatewayErrorKind::status(503, "overloaded"));
        let (status, body) = render(error.clone(), true);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body,
            json!({"error": "AI service unavailable", "debug": {"status": 503, "detail": "overloaded"}})
        );

        let (_, body) = render(error, false);
        assert_eq!(body, json!({"error": "AI service unavailable"}));
    }

    #[test]
    fn test_transport_failure() {
        let error = GatewayError::new(GatewayErrorKind::Transport("connection reset".into()));
        let (status, body) = render(error, true);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["debug"]["message"], "connection reset");
    }
}
