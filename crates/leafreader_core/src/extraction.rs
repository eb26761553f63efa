//! Structured dialogue/scene results.

/// Text read off one screenshot.
///
/// `dialogue` is the speaker-attributed line from a dialogue box, or an
/// item/label name when no box is shown. `scene` is everything legible on
/// screen and is never empty while `dialogue` is not.
///
/// # Examples
///
/// ```
/// use leafreader_core::ExtractionResult;
///
/// let result = ExtractionResult::new("Isabelle: Hello!", "");
/// assert_eq!(result.scene(), "Isabelle: Hello!");
///
/// assert!(ExtractionResult::empty().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct ExtractionResult {
    dialogue: String,
    scene: String,
}

impl ExtractionResult {
    /// Build a result, defaulting `scene` to `dialogue` when it is empty.
    pub fn new(dialogue: impl Into<String>, scene: impl Into<String>) -> Self {
        let dialogue = dialogue.into();
        let mut scene = scene.into();
        if scene.is_empty() && !dialogue.is_empty() {
            scene = dialogue.clone();
        }
        Self { dialogue, scene }
    }

    /// The canonical empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when neither field carries text.
    pub fn is_empty(&self) -> bool {
        self.dialogue.is_empty() && self.scene.is_empty()
    }

    /// Split into `(dialogue, scene)`.
    pub fn into_parts(self) -> (String, String) {
        (self.dialogue, self.scene)
    }
}
