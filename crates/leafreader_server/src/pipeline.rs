//! The request pipeline shared by every endpoint.

use crate::{AppState, Endpoint, ReplyShape, validate};
use leafreader_error::{ConfigError, LeafreaderResult, RequestError};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

/// Characters of guide output echoed to the log.
const LOGGED_CONTENT_CHARS: usize = 200;

/// Validate, call the upstream model once, and shape its answer.
///
/// The credential check comes first, so a misconfigured deployment answers
/// every request with a configuration error and never reaches the model.
/// `body` is `Err` when it could not be buffered.
#[instrument(skip_all, fields(endpoint = endpoint.name))]
pub async fn run(
    state: &AppState,
    endpoint: &Endpoint,
    body: Result<&[u8], RequestError>,
) -> LeafreaderResult<Value> {
    let Some(driver) = state.driver() else {
        error!("Upstream credential not configured");
        return Err(ConfigError::new("upstream credential not configured").into());
    };

    let input = body
        .and_then(|body| validate(endpoint, body))
        .inspect_err(|e| debug!(error = %e, "Rejected request"))?;

    let request = endpoint.vision_request(input.image.data_uri(), input.text.as_deref());
    debug!(
        provider = driver.provider_name(),
        model = driver.model_name(),
        data_uri = input.image.is_data_uri(),
        "Calling upstream model"
    );

    let completion = driver.complete(&request).await.inspect_err(|e| {
        error!(error = %e, "Upstream call failed");
    })?;

    if endpoint.reply == ReplyShape::Guide {
        info!(
            finish_reason = completion.finish_reason_or_unknown(),
            content_length = completion.content.len(),
            content = %completion.content.chars().take(LOGGED_CONTENT_CHARS).collect::<String>(),
            "Guide response"
        );
    }

    Ok(endpoint.reply.render(&completion))
}
