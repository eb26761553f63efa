//! HTTP endpoints that read handheld game screenshots through a multimodal model.
//!
//! Each endpoint accepts a photo of a Nintendo 3DS / Switch screen, sends it
//! to an OpenAI-compatible gateway with a fixed prompt, and reshapes the
//! answer into a small JSON contract:
//!
//! | Route | Body in | Body out |
//! |---|---|---|
//! | `POST /api/detect-text` | `image` | `{detected}` |
//! | `POST /api/ocr` | `image` | `{text, debug}` |
//! | `POST /api/extract` | `image` | `{text, scene, debug}` |
//! | `POST /api/context` | `image`, `text` | `{context, debug}` |
//! | `POST /api/guide` | `image`, `text` | `{guide, finish_reason, debug}` |
//!
//! Failures answer `{error, debug?}` with 400, 405, 413, 500 or 502.
//!
//! # Example
//!
//! ```rust,no_run
//! use leafreader_server::{AppConfig, AppState, create_router};
//! use leafreader_models::GatewayClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load(None)?;
//!     let state = match config.gateway.connect() {
//!         Some(gateway) => AppState::new(Arc::new(GatewayClient::new(gateway))),
//!         None => AppState::unconfigured(),
//!     };
//!     let app = create_router(state, config.server.body_limit_bytes);
//!
//!     let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.server.port)).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod endpoint;
mod observability;
mod pipeline;
mod prompts;
mod response;
mod routes;
mod validate;

pub use config::{AppConfig, GatewaySettings, LoggingConfig, ServerSettings};
pub use endpoint::{
    CONTEXT, DETECT_TEXT, ENDPOINTS, EXTRACT, Endpoint, GUIDE, Instruction, OCR, ReplyShape,
};
pub use observability::init_logging;
pub use pipeline::run;
pub use response::ErrorResponse;
pub use routes::{AppState, create_router};
pub use validate::{ValidInput, validate};
