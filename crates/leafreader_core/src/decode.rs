//! Decoders turning raw model content into endpoint payloads.
//!
//! The structured decoder asks nothing of its input: the model is told to
//! answer `{"dialogue": "...", "scene": "..."}`, but its answers arrive
//! fenced in markdown, cut off at the token limit, or in the plain-text
//! format an older prompt produced. [`decode_extraction`] walks a fixed
//! ladder of strategies and always returns something:
//!
//! 1. strip a markdown fence,
//! 2. parse the remainder as a JSON object,
//! 3. scan for the two fields, accepting an unterminated value,
//! 4. take the whole content as legacy plain text,
//! 5. give up with the empty result.

use crate::ExtractionResult;
use serde_json::Value;
use tracing::{debug, instrument};

/// What the model answers when it cannot read anything.
pub const NO_TEXT_FOUND: &str = "NO_TEXT_FOUND";

const FENCE: &str = "```";
const FENCE_TAG: &str = "json";
const DIALOGUE: &str = "dialogue";
const SCENE: &str = "scene";

/// Decode the structured `{dialogue, scene}` answer.
///
/// Deterministic, and never fails: malformed input degrades to a less
/// structured result and finally to [`ExtractionResult::empty`].
///
/// # Examples
///
/// ```
/// use leafreader_core::decode_extraction;
///
/// let result = decode_extraction(r#"{"dialogue":"Tom Nook: Welcome to my sh"#);
/// assert_eq!(result.dialogue(), "Tom Nook: Welcome to my sh");
/// assert_eq!(result.scene(), "Tom Nook: Welcome to my sh");
/// ```
#[instrument(level = "debug", skip_all, fields(raw_len = raw.len()))]
pub fn decode_extraction(raw: &str) -> ExtractionResult {
    let trimmed = raw.trim();
    let candidate = strip_fence(trimmed);
    let mut found_fields = false;

    if let Some(fields) = parse_fields(candidate) {
        found_fields = true;
        if fields.has_text() {
            debug!(strategy = "json", "Decoded model output");
            return fields.into_result();
        }
    }

    if let Some(fields) = scan_fields(candidate) {
        found_fields = true;
        if fields.has_text() {
            debug!(strategy = "scan", "Decoded model output");
            return fields.into_result();
        }
    }

    if !found_fields && !trimmed.is_empty() && trimmed != NO_TEXT_FOUND {
        debug!(strategy = "legacy", "Decoded model output");
        return ExtractionResult::new(trimmed, trimmed);
    }

    debug!(strategy = "empty", "Decoded model output");
    ExtractionResult::empty()
}

/// Decode a plain OCR answer: trimmed content, or empty for the sentinel.
///
/// # Examples
///
/// ```
/// use leafreader_core::decode_plain_text;
///
/// assert_eq!(decode_plain_text("  K.K.: Hey!\n"), "K.K.: Hey!");
/// assert_eq!(decode_plain_text("NO_TEXT_FOUND"), "");
/// ```
pub fn decode_plain_text(raw: &str) -> String {
    match raw.trim() {
        NO_TEXT_FOUND => String::new(),
        text => text.to_string(),
    }
}

/// Decode a YES/NO detector answer.
///
/// # Examples
///
/// ```
/// use leafreader_core::decode_detection;
///
/// assert!(decode_detection(" yes."));
/// assert!(!decode_detection("NO"));
/// ```
pub fn decode_detection(raw: &str) -> bool {
    raw.trim().to_uppercase().starts_with("YES")
}

/// Fields located in the model output. `None` means the key never appeared.
#[derive(Debug, Default)]
struct Fields {
    dialogue: Option<String>,
    scene: Option<String>,
}

impl Fields {
    fn found(&self) -> bool {
        self.dialogue.is_some() || self.scene.is_some()
    }

    fn has_text(&self) -> bool {
        [&self.dialogue, &self.scene]
            .into_iter()
            .flatten()
            .any(|value| !value.is_empty())
    }

    fn into_result(self) -> ExtractionResult {
        ExtractionResult::new(
            self.dialogue.unwrap_or_default(),
            self.scene.unwrap_or_default(),
        )
    }
}

/// Remove a leading ```` ``` ```` / ```` ```json ```` and a trailing ```` ``` ````.
fn strip_fence(text: &str) -> &str {
    let mut body = text;
    if let Some(rest) = body.strip_prefix(FENCE) {
        body = match rest.get(..FENCE_TAG.len()) {
            Some(tag) if tag.eq_ignore_ascii_case(FENCE_TAG) => &rest[FENCE_TAG.len()..],
            _ => rest,
        };
    }
    if let Some(rest) = body.strip_suffix(FENCE) {
        body = rest;
    }
    body.trim()
}

/// Strict parse. Non-string field values count as present but empty.
fn parse_fields(candidate: &str) -> Option<Fields> {
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(candidate) else {
        return None;
    };
    let field = |key: &str| {
        object
            .get(key)
            .map(|value| value.as_str().unwrap_or_default().trim().to_string())
    };
    let fields = Fields {
        dialogue: field(DIALOGUE),
        scene: field(SCENE),
    };
    fields.found().then_some(fields)
}

/// Truncation-tolerant scan for each field on its own.
fn scan_fields(candidate: &str) -> Option<Fields> {
    let fields = Fields {
        dialogue: scan_field(candidate, DIALOGUE),
        scene: scan_field(candidate, SCENE),
    };
    fields.found().then_some(fields)
}

/// First `"key" : "value` in `text`, the closing quote being optional.
fn scan_field(text: &str, key: &str) -> Option<String> {
    let needle = format!("\"{key}\"");
    let mut from = 0;
    while let Some(offset) = text[from..].find(&needle) {
        let key_end = from + offset + needle.len();
        if let Some(value_offset) = value_offset(&text[key_end..]) {
            let value = capture_value(&text[key_end + value_offset..]);
            return Some(unescape(value));
        }
        from = key_end;
    }
    None
}

/// Offset of the first value character after `\s*:\s*"`.
fn value_offset(rest: &str) -> Option<usize> {
    let value = rest
        .trim_start()
        .strip_prefix(':')?
        .trim_start()
        .strip_prefix('"')?;
    Some(rest.len() - value.len())
}

/// Characters up to the closing quote, or to the end of input.
///
/// A dangling backslash at the end is not part of the value.
fn capture_value(value: &str) -> &str {
    let mut chars = value.char_indices();
    while let Some((index, ch)) = chars.next() {
        match ch {
            '"' => return &value[..index],
            '\\' if chars.next().is_none() => return &value[..index],
            _ => {}
        }
    }
    value
}

fn unescape(value: &str) -> String {
    value
        .replace("\\\"", "\"")
        .replace("\\n", " ")
        .trim()
        .to_string()
}
