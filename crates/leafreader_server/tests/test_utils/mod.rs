//! Test utilities for leafreader server tests.
//!
//! This module provides a mock driver and helpers for running the router
//! on an ephemeral port.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::MockDriver;

use leafreader_server::{AppState, create_router};

/// Body limit used by spawned test servers.
pub const TEST_BODY_LIMIT: usize = 4_718_592;

/// A data URI small enough to keep request bodies readable.
#[allow(dead_code)]
pub const TINY_IMAGE: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";

/// Serve the router on 127.0.0.1 with an ephemeral port and return its base URL.
pub async fn spawn_server(state: AppState) -> String {
    spawn_server_with_limit(state, TEST_BODY_LIMIT).await
}

/// Like [`spawn_server`], with a custom request body limit.
pub async fn spawn_server_with_limit(state: AppState, body_limit: usize) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("Failed to read local address");
    let app = create_router(state, body_limit);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}", address)
}
