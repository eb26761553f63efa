//! Inbound payload validation.

use crate::Endpoint;
use leafreader_core::ImagePayload;
use leafreader_error::{RequestError, RequestErrorKind};
use serde_json::{Map, Value};

/// A payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput {
    /// The screenshot
    pub image: ImagePayload,
    /// Previously extracted screen text, for contextual endpoints
    pub text: Option<String>,
}

/// Check the raw body against what `endpoint` requires.
///
/// A body that is not a JSON object is treated like an empty object.
pub fn validate(endpoint: &Endpoint, body: &[u8]) -> Result<ValidInput, RequestError> {
    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        _ => Map::new(),
    };
    let string = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    };

    if endpoint.requires_text() {
        let (Some(image), Some(text)) = (string("image"), string("text")) else {
            return Err(RequestError::new(RequestErrorKind::MissingImageOrText));
        };
        Ok(ValidInput {
            image: payload(image, RequestErrorKind::MissingImageOrText)?,
            text: Some(text.to_string()),
        })
    } else {
        let image =
            string("image").ok_or_else(|| RequestError::new(RequestErrorKind::MissingImage))?;
        Ok(ValidInput {
            image: payload(image, RequestErrorKind::MissingImage)?,
            text: None,
        })
    }
}

fn payload(image: &str, kind: RequestErrorKind) -> Result<ImagePayload, RequestError> {
    ImagePayload::parse(image).ok_or_else(|| RequestError::new(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{CONTEXT, OCR};

    fn kind(result: Result<ValidInput, RequestError>) -> RequestErrorKind {
        result.expect_err("should be rejected").kind()
    }

    #[test]
    fn test_image_only_endpoint() {
        let input = validate(&OCR, br#"{"image":"QUJD","text":"ignored"}"#).unwrap();
        assert_eq!(input.image.data_uri(), "data:image/jpeg;base64,QUJD");
        assert_eq!(input.text, None);
    }

    #[test]
    fn test_rejects_missing_or_empty_image() {
        assert_eq!(kind(validate(&OCR, b"{}")), RequestErrorKind::MissingImage);
        assert_eq!(kind(validate(&OCR, br#"{"image":""}"#)), RequestErrorKind::MissingImage);
        assert_eq!(kind(validate(&OCR, br#"{"image":42}"#)), RequestErrorKind::MissingImage);
    }

    #[test]
    fn test_non_object_body_is_treated_as_empty() {
        assert_eq!(kind(validate(&OCR, b"")), RequestErrorKind::MissingImage);
        assert_eq!(kind(validate(&OCR, b"not json")), RequestErrorKind::MissingImage);
        assert_eq!(kind(validate(&OCR, b"[1,2]")), RequestErrorKind::MissingImage);
    }

    #[test]
    fn test_contextual_endpoint_requires_text() {
        assert_eq!(
            kind(validate(&CONTEXT, br#"{"image":"QUJD"}"#)),
            RequestErrorKind::MissingImageOrText
        );
        assert_eq!(
            kind(validate(&CONTEXT, br#"{"image":"QUJD","text":""}"#)),
            RequestErrorKind::MissingImageOrText
        );
        let input = validate(&CONTEXT, br#"{"image":"data:image/png;base64,QUJD","text":"Hi"}"#)
            .unwrap();
        assert_eq!(input.image.data_uri(), "data:image/png;base64,QUJD");
        assert_eq!(input.text.as_deref(), Some("Hi"));
    }
}
