use leafreader_core::{Sampling, VisionRequest};
use leafreader_error::{DETAIL_LIMIT, GatewayErrorKind};
use leafreader_models::{GatewayClient, GatewayConfig, VisionDriver};
use mockito::Matcher;
use serde_json::json;

fn vision_request() -> VisionRequest {
    VisionRequest::new(
        "You are a simple text detector.",
        "Is there readable video game text visible in this image?",
        "data:image/jpeg;base64,QUJD",
        Sampling::new(5, 0.0),
    )
}

fn client_for(server: &mockito::Server) -> GatewayClient {
    GatewayClient::new(GatewayConfig::new(
        format!("{}/v1/chat/completions", server.url()),
        "google/gemini-3-flash",
        "test-key",
    ))
}

#[tokio::test]
async fn test_complete_success() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "google/gemini-3-flash",
            "max_tokens": 5,
            "messages": [
                {"role": "system", "content": "You are a simple text detector."},
                {"role": "user", "content": [
                    {"type": "text", "text": "Is there readable video game text visible in this image?"},
                    {"type": "image_url", "image_url": {"url": "data:image/jpeg;base64,QUJD"}}
                ]}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "model": "google/gemini-3-flash",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "YES"},
                    "finish_reason": "stop"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let completion = client_for(&server).complete(&vision_request()).await?;

    mock.assert_async().await;
    assert_eq!(completion.content, "YES");
    assert_eq!(completion.finish_reason.as_deref(), Some("stop"));
    assert_eq!(completion.model.as_deref(), Some("google/gemini-3-flash"));
    Ok(())
}

#[tokio::test]
async fn test_missing_content_is_empty() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(json!({"choices": []}).to_string())
        .create_async()
        .await;

    let completion = client_for(&server).complete(&vision_request()).await?;

    assert_eq!(completion.content, "");
    assert!(completion.finish_reason.is_none());
    Ok(())
}

#[tokio::test]
async fn test_null_choices_is_empty() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(json!({"model": "m", "choices": null}).to_string())
        .create_async()
        .await;

    let completion = client_for(&server).complete(&vision_request()).await?;

    assert_eq!(completion.content, "");
    assert!(completion.finish_reason.is_none());
    assert_eq!(completion.model.as_deref(), Some("m"));
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_truncated() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .with_body("o".repeat(2 * DETAIL_LIMIT))
        .create_async()
        .await;

    let err = client_for(&server)
        .complete(&vision_request())
        .await
        .expect_err("503 must fail");

    match err.kind() {
        GatewayErrorKind::Status { status, detail } => {
            assert_eq!(*status, 503);
            assert_eq!(detail.chars().count(), DETAIL_LIMIT);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_body_is_envelope_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("<html>gateway maintenance</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .complete(&vision_request())
        .await
        .expect_err("html body must fail");

    assert!(matches!(err.kind(), GatewayErrorKind::Envelope(_)));
}

#[tokio::test]
async fn test_unreachable_gateway_is_transport_error() {
    let client = GatewayClient::new(GatewayConfig::new(
        "http://127.0.0.1:9/v1/chat/completions",
        "google/gemini-3-flash",
        "test-key",
    ));

    let err = client
        .complete(&vision_request())
        .await
        .expect_err("nothing listens on the discard port");

    assert!(matches!(err.kind(), GatewayErrorKind::Transport(_)));
}

#[test]
fn test_config_debug_redacts_key() {
    let config = GatewayConfig::new("https://example.invalid", "m", "sk-secret");
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("sk-secret"));
    assert!(rendered.contains("<redacted>"));
}
