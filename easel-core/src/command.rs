//! The command interpreter: free-text transcripts to drawing intents.
//!
//! Detection runs as independent, ordered substring checks over the whole
//! transcript, not positional parsing. Shape and size slots resolve by check
//! order (the last matching check wins), while color resolves by token order
//! (the last matching word wins). "small big tree" is big because the large
//! check runs last, not because "big" comes later in the phrase.

use crate::intent::{DrawIntent, Shape, SizeClass, SystemCommand, VoiceAction};
use crate::surface::Color;

/// Shape keywords in detection order. Later checks override earlier ones.
const SHAPE_CHECKS: [(&str, Shape); 6] = [
    ("tree", Shape::Tree),
    ("mountain", Shape::Mountain),
    ("sun", Shape::Sun),
    ("circle", Shape::Circle),
    ("curve", Shape::Curve),
    ("line", Shape::Line),
];

/// Size keyword groups in detection order. Later groups override earlier ones.
const SIZE_CHECKS: [(&[&str], SizeClass); 3] = [
    (&["small", "tiny"], SizeClass::Small),
    (&["medium", "normal"], SizeClass::Medium),
    (&["large", "big", "huge"], SizeClass::Large),
];

/// System command keywords in detection order. The first present wins and
/// suppresses shape dispatch entirely.
const COMMAND_CHECKS: [(&str, SystemCommand); 4] = [
    ("clear", SystemCommand::Clear),
    ("undo", SystemCommand::Undo),
    ("redo", SystemCommand::Redo),
    ("save", SystemCommand::Save),
];

/// Spoken color names, matched per token, last match wins.
const COLOR_WORDS: [&str; 8] = [
    "red", "green", "blue", "yellow", "black", "white", "orange", "purple",
];

/// Session defaults applied when a transcript omits size or color.
#[derive(Debug, Clone, Copy)]
pub struct InterpreterDefaults {
    /// Color used when no color word is spoken.
    pub color: Color,
    /// Pixel size used when no size word is spoken.
    pub size: f32,
}

impl Default for InterpreterDefaults {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            size: SizeClass::Medium.pixels(),
        }
    }
}

/// Whether a token belongs to any recognized keyword set.
fn is_keyword(word: &str) -> bool {
    SHAPE_CHECKS.iter().any(|(kw, _)| *kw == word)
        || SIZE_CHECKS.iter().any(|(group, _)| group.contains(&word))
        || COLOR_WORDS.contains(&word)
        || COMMAND_CHECKS.iter().any(|(kw, _)| *kw == word)
}

/// Interpret one transcript into a [`VoiceAction`].
///
/// The transcript is trimmed and lowercased before matching. Empty or
/// whitespace-only input is a no-op, never an error.
#[must_use]
pub fn interpret(transcript: &str, defaults: InterpreterDefaults) -> VoiceAction {
    let phrase = transcript.trim().to_lowercase();
    if phrase.is_empty() {
        return VoiceAction::Ignored;
    }
    let words: Vec<&str> = phrase.split_whitespace().collect();

    let mut shape = None;
    for (keyword, candidate) in SHAPE_CHECKS {
        if phrase.contains(keyword) {
            shape = Some(candidate);
        }
    }

    let mut size = defaults.size;
    for (group, class) in SIZE_CHECKS {
        if group.iter().any(|kw| phrase.contains(kw)) {
            size = class.pixels();
        }
    }

    let mut color = defaults.color;
    for word in &words {
        if let Some(c) = Color::from_name(word) {
            color = c;
        }
    }

    // System commands are checked before shape dispatch and suppress it,
    // even when a shape keyword is also present.
    for (keyword, command) in COMMAND_CHECKS {
        if phrase.contains(keyword) {
            tracing::debug!("Voice command: {:?}", command);
            return VoiceAction::System(command);
        }
    }

    if let Some(shape) = shape {
        let intent = DrawIntent { shape, size, color };
        tracing::debug!("Voice draw intent: {:?}", intent);
        return VoiceAction::Draw(intent);
    }

    match words.iter().find(|w| !is_keyword(w)) {
        // Size words still resolve for placeholders: "big banana" records
        // the large size alongside the unknown word.
        Some(word) => VoiceAction::Placeholder {
            word: (*word).to_string(),
            size,
        },
        None => VoiceAction::Ignored,
    }
}
