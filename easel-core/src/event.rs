//! Input events for the three drawing modalities.
//!
//! Adapters (pointer wiring, speech recognition, the camera hand-tracker)
//! are thin event producers; the core only consumes these types. All events
//! are delivered one at a time in arrival order.

use serde::{Deserialize, Serialize};

use crate::intent::SystemCommand;

/// Number of landmarks a complete hand detection carries (MediaPipe layout).
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Phase of a pointer (mouse/touch) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Button/finger down.
    Down,
    /// Dragging.
    Move,
    /// Button/finger up.
    Up,
}

/// A pointer event with coordinates already relative to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// X position in surface pixels.
    pub x: f32,
    /// Y position in surface pixels.
    pub y: f32,
    /// Phase of this event.
    pub phase: PointerPhase,
}

/// A voice input event from speech recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceEvent {
    /// The recognized speech transcript.
    pub transcript: String,
    /// Whether this is a final (committed) result.
    ///
    /// Interim results may still change and are never interpreted.
    pub is_final: bool,
    /// Timestamp when the speech was recognized (ms since session start).
    pub timestamp_ms: u64,
}

impl VoiceEvent {
    /// Create a final voice event.
    #[must_use]
    pub fn final_result(transcript: impl Into<String>, timestamp_ms: u64) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
            timestamp_ms,
        }
    }
}

/// One normalized hand landmark in [0,1] coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized X (0 = left edge of the camera frame).
    pub x: f32,
    /// Normalized Y (0 = top edge of the camera frame).
    pub y: f32,
    /// Relative depth (unused by tracking, kept for completeness).
    pub z: f32,
}

/// One detection cycle's hand landmarks plus the source frame geometry.
///
/// Produced per camera frame and consumed immediately, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureFrame {
    /// Detected landmarks; empty when no hand was found.
    pub landmarks: Vec<Landmark>,
    /// Source camera frame width in pixels.
    pub frame_width: u32,
    /// Source camera frame height in pixels.
    pub frame_height: u32,
    /// Frame timestamp (ms since session start).
    pub timestamp_ms: u64,
}

impl GestureFrame {
    /// An empty frame: no hand detected this cycle.
    #[must_use]
    pub fn absent(frame_width: u32, frame_height: u32, timestamp_ms: u64) -> Self {
        Self {
            landmarks: Vec::new(),
            frame_width,
            frame_height,
            timestamp_ms,
        }
    }

    /// The landmark list, only when it is a complete hand.
    ///
    /// Malformed frames (wrong landmark count) read as "no hand detected";
    /// they are never an error.
    #[must_use]
    pub fn hand(&self) -> Option<&[Landmark]> {
        (self.landmarks.len() == HAND_LANDMARK_COUNT).then_some(self.landmarks.as_slice())
    }
}

/// All input events the drawing session can receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InputEvent {
    /// Mouse/touch input.
    Pointer(PointerEvent),
    /// Speech recognition result.
    Voice(VoiceEvent),
    /// One camera tick of hand tracking.
    Gesture(GestureFrame),
    /// A system command issued directly (UI buttons).
    System(SystemCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_landmark_list_is_not_a_hand() {
        let frame = GestureFrame {
            landmarks: vec![Landmark { x: 0.5, y: 0.5, z: 0.0 }; 7],
            frame_width: 640,
            frame_height: 480,
            timestamp_ms: 0,
        };
        assert!(frame.hand().is_none());
    }

    #[test]
    fn complete_landmark_list_is_a_hand() {
        let frame = GestureFrame {
            landmarks: vec![Landmark { x: 0.5, y: 0.5, z: 0.0 }; HAND_LANDMARK_COUNT],
            frame_width: 640,
            frame_height: 480,
            timestamp_ms: 0,
        };
        assert_eq!(frame.hand().map(<[Landmark]>::len), Some(HAND_LANDMARK_COUNT));
    }

    #[test]
    fn absent_frame_has_no_hand() {
        assert!(GestureFrame::absent(640, 480, 10).hand().is_none());
    }
}
