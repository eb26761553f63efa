//! The endpoint table.
//!
//! Every endpoint runs the same pipeline; what differs is captured here:
//! the prompt, the task line, the sampling constants and how the model's
//! answer is shaped into the response body.

use crate::prompts::*;
use leafreader_core::{
    Completion, Sampling, VisionRequest, decode_detection, decode_extraction, decode_plain_text,
};
use serde_json::{Value, json};

/// The user-turn task line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// The same line for every request
    Fixed(&'static str),
    /// Caller-supplied screen text quoted ahead of the request line
    WithScreenText {
        /// What the model should do with the quoted text
        request: &'static str,
    },
}

impl Instruction {
    /// Render the task line, interpolating `text` where the instruction quotes it.
    pub fn render(&self, text: Option<&str>) -> String {
        match self {
            Self::Fixed(line) => (*line).to_string(),
            Self::WithScreenText { request } => format!(
                "The text on screen says: \"{}\"\n\n{request}",
                text.unwrap_or_default()
            ),
        }
    }
}

/// How a completion becomes a success body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyShape {
    /// `{detected}` from a YES/NO answer
    Detection,
    /// `{text, debug}` from plain OCR output
    PlainText,
    /// `{text, scene, debug}` from the structured dialogue/scene answer
    Extraction,
    /// `{context, debug}`
    Context,
    /// `{guide, finish_reason, debug}`
    Guide,
}

impl ReplyShape {
    /// Build the success body for `completion`.
    pub fn render(self, completion: &Completion) -> Value {
        let raw = completion.content.as_str();
        match self {
            Self::Detection => json!({ "detected": decode_detection(raw) }),
            Self::PlainText => json!({
                "text": decode_plain_text(raw),
                "debug": { "rawContent": raw, "model": completion.model },
            }),
            Self::Extraction => {
                let (dialogue, scene) = decode_extraction(raw).into_parts();
                json!({
                    "text": dialogue,
                    "scene": scene,
                    "debug": { "rawContent": raw, "model": completion.model },
                })
            }
            Self::Context => json!({
                "context": raw.trim(),
                "debug": { "model": completion.model },
            }),
            Self::Guide => json!({
                "guide": raw.trim(),
                "finish_reason": completion.finish_reason_or_unknown(),
                "debug": { "model": completion.model },
            }),
        }
    }
}

/// One HTTP endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    /// Short name used in logs
    pub name: &'static str,
    /// Route path
    pub path: &'static str,
    /// System prompt
    pub system_prompt: &'static str,
    /// User task line
    pub instruction: Instruction,
    /// Sampling constants
    pub sampling: Sampling,
    /// Success body shape
    pub reply: ReplyShape,
    /// Whether failure bodies carry a `debug` object
    pub diagnostics: bool,
}

impl Endpoint {
    /// Whether callers must send the previously extracted `text`.
    pub fn requires_text(&self) -> bool {
        matches!(self.instruction, Instruction::WithScreenText { .. })
    }

    /// The upstream request for one validated input.
    pub fn vision_request(&self, image_url: String, text: Option<&str>) -> VisionRequest {
        VisionRequest::new(
            self.system_prompt,
            self.instruction.render(text),
            image_url,
            self.sampling,
        )
    }
}

/// `POST /api/detect-text`
pub const DETECT_TEXT: Endpoint = Endpoint {
    name: "detect-text",
    path: "/api/detect-text",
    system_prompt: DETECT_TEXT_PROMPT,
    instruction: Instruction::Fixed(DETECT_TEXT_TASK),
    sampling: Sampling::new(5, 0.0),
    reply: ReplyShape::Detection,
    diagnostics: false,
};

/// `POST /api/ocr`
pub const OCR: Endpoint = Endpoint {
    name: "ocr",
    path: "/api/ocr",
    system_prompt: OCR_PROMPT,
    instruction: Instruction::Fixed(OCR_TASK),
    sampling: Sampling::new(1024, 0.1),
    reply: ReplyShape::PlainText,
    diagnostics: true,
};

/// `POST /api/extract`
pub const EXTRACT: Endpoint = Endpoint {
    name: "extract",
    path: "/api/extract",
    system_prompt: EXTRACT_PROMPT,
    instruction: Instruction::Fixed(EXTRACT_TASK),
    sampling: Sampling::new(1024, 0.1),
    reply: ReplyShape::Extraction,
    diagnostics: true,
};

/// `POST /api/context`
pub const CONTEXT: Endpoint = Endpoint {
    name: "context",
    path: "/api/context",
    system_prompt: CONTEXT_PROMPT,
    instruction: Instruction::WithScreenText {
        request: CONTEXT_TASK,
    },
    sampling: Sampling::new(256, 0.7),
    reply: ReplyShape::Context,
    diagnostics: true,
};

/// `POST /api/guide`
pub const GUIDE: Endpoint = Endpoint {
    name: "guide",
    path: "/api/guide",
    system_prompt: GUIDE_PROMPT,
    instruction: Instruction::WithScreenText {
        request: GUIDE_TASK,
    },
    sampling: Sampling::new(500, 0.7),
    reply: ReplyShape::Guide,
    diagnostics: true,
};

/// Every endpoint the router serves.
pub const ENDPOINTS: [Endpoint; 5] = [DETECT_TEXT, OCR, EXTRACT, CONTEXT, GUIDE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contextual_instruction_quotes_text() {
        let line = GUIDE.instruction.render(Some("Tom Nook: Hm?"));
        assert!(line.starts_with("The text on screen says: \"Tom Nook: Hm?\"\n\n"));
        assert!(line.ends_with(GUIDE_TASK));
    }

    #[test]
    fn test_only_contextual_endpoints_require_text() {
        let required: Vec<_> = ENDPOINTS
            .iter()
            .filter(|endpoint| endpoint.requires_text())
            .map(|endpoint| endpoint.name)
            .collect();
        assert_eq!(required, ["context", "guide"]);
    }

    #[test]
    fn test_guide_defaults_finish_reason() {
        let body = ReplyShape::Guide.render(&Completion::from_content("  Press A!  "));
        assert_eq!(body["guide"], "Press A!");
        assert_eq!(body["finish_reason"], "unknown");
    }

    #[test]
    fn test_guide_empty_finish_reason_is_unknown() {
        let completion = Completion {
            finish_reason: Some(String::new()),
            ..Completion::from_content("Shake the tree.")
        };
        let body = ReplyShape::Guide.render(&completion);
        assert_eq!(body["finish_reason"], "unknown");
    }

    #[test]
    fn test_extraction_body_maps_dialogue_to_text() {
        let raw = "```json\n{\"dialogue\":\"K.K.: Yo!\",\"scene\":\"K.K.: Yo! Request\"}\n```";
        let body = ReplyShape::Extraction.render(&Completion::from_content(raw));
        assert_eq!(body["text"], "K.K.: Yo!");
        assert_eq!(body["scene"], "K.K.: Yo! Request");
        assert_eq!(body["debug"]["rawContent"], raw);
    }
}
