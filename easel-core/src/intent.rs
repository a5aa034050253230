//! Structured drawing intents: the command interpreter's fully-resolved output.

use serde::{Deserialize, Serialize};

use crate::surface::Color;

/// A drawable named primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Trunk plus three-circle foliage.
    Tree,
    /// Gray triangle with a snowy cap.
    Mountain,
    /// Filled disc with twelve rays.
    Sun,
    /// Stroked circle.
    Circle,
    /// Quadratic arc.
    Curve,
    /// Horizontal line.
    Line,
}

/// Spoken size classes and their fixed pixel sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// "small" / "tiny".
    Small,
    /// "medium" / "normal".
    Medium,
    /// "large" / "big" / "huge".
    Large,
}

impl SizeClass {
    /// The pixel size this class resolves to.
    #[must_use]
    pub const fn pixels(self) -> f32 {
        match self {
            Self::Small => 40.0,
            Self::Medium => 60.0,
            Self::Large => 120.0,
        }
    }
}

/// A fully-resolved instruction to render a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawIntent {
    /// Which primitive to paint.
    pub shape: Shape,
    /// Resolved size in pixels.
    pub size: f32,
    /// Resolved color.
    pub color: Color,
}

/// Session-level commands recognized in any modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemCommand {
    /// Wipe the surface.
    Clear,
    /// Step back in history.
    Undo,
    /// Step forward in history.
    Redo,
    /// Persist the current surface.
    Save,
}

/// The command interpreter's verdict for one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum VoiceAction {
    /// Render a shape at the cursor.
    Draw(DrawIntent),
    /// Run a system command; suppresses any shape in the same transcript.
    System(SystemCommand),
    /// No keyword matched: mark the first unrecognized word.
    Placeholder {
        /// The unrecognized word, verbatim.
        word: String,
        /// The size resolved from the transcript ("big banana" records 120).
        size: f32,
    },
    /// Empty transcript, or every token was a recognized keyword with
    /// nothing to do.
    Ignored,
}
