//! The gesture interpreter: hand-landmark streams to smoothed drawing points.
//!
//! An explicit state machine carries the smoothing accumulator, the stroke
//! anchor, the draw/erase flags and the reacquisition grace timer across
//! frames. Timing uses frame timestamps, not wall clock, so the 150 ms
//! grace behavior is deterministic under test.

use serde::{Deserialize, Serialize};

use crate::event::GestureFrame;
use crate::surface::{Color, Point, StrokeSegment};

/// Fingertip landmark indices (index, middle, ring, pinky).
const FINGER_TIPS: [usize; 4] = [8, 12, 16, 20];

/// Matching base-joint (MCP) landmark indices.
const FINGER_MCPS: [usize; 4] = [5, 9, 13, 17];

/// Thumb tip and the joint below it; the thumb extends laterally.
const THUMB_TIP: usize = 4;
const THUMB_IP: usize = 3;

/// The landmark tracked as the drawing point (index fingertip).
const TRACKED_TIP: usize = 8;

/// Configuration for gesture tracking.
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    /// Weight given to the newest sample when smoothing (0..=1).
    pub smoothing: f32,
    /// How long a hand may vanish before tracking state resets (ms).
    pub grace_ms: u64,
    /// Stroke width while drawing.
    pub draw_width: f32,
    /// Stroke width while erasing (wide, like a thumb of an eraser).
    pub erase_width: f32,
    /// Stroke color while drawing.
    pub draw_color: Color,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.4,
            grace_ms: 150,
            draw_width: 5.0,
            erase_width: 25.0,
            draw_color: Color::WHITE,
        }
    }
}

/// Per-frame output of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureUpdate {
    /// The smoothed fingertip position, if tracking is live.
    pub point: Option<Point>,
    /// A stroke segment to paint, when drawing is enabled.
    pub segment: Option<StrokeSegment>,
    /// True when this segment begins a fresh stroke run (no prior anchor).
    pub starts_stroke: bool,
    /// Whether drawing is currently enabled.
    pub drawing: bool,
    /// Whether erase mode is currently on.
    pub erasing: bool,
}

impl GestureUpdate {
    fn idle(point: Option<Point>, drawing: bool, erasing: bool) -> Self {
        Self {
            point,
            segment: None,
            starts_stroke: false,
            drawing,
            erasing,
        }
    }
}

/// Count extended fingers from landmark geometry.
///
/// A finger is extended when its tip sits above (smaller y than) its base
/// joint; the thumb extends laterally, so it compares on x instead.
///
/// # Panics
///
/// Panics if `landmarks` holds fewer than
/// [`HAND_LANDMARK_COUNT`](crate::event::HAND_LANDMARK_COUNT) points.
/// [`GestureFrame::hand`](crate::event::GestureFrame::hand) yields complete
/// hands only.
#[must_use]
pub fn count_extended_fingers(landmarks: &[crate::event::Landmark]) -> u8 {
    assert!(
        landmarks.len() >= crate::event::HAND_LANDMARK_COUNT,
        "landmark slice shorter than a complete hand"
    );
    let mut count = 0;
    for i in 0..4 {
        if landmarks[FINGER_TIPS[i]].y < landmarks[FINGER_MCPS[i]].y {
            count += 1;
        }
    }
    if landmarks[THUMB_TIP].x < landmarks[THUMB_IP].x {
        count += 1;
    }
    count
}

/// Stateful interpreter for a stream of [`GestureFrame`]s.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    config: GestureConfig,
    /// Exponentially smoothed fingertip, None until first sample.
    smoothed: Option<Point>,
    /// Last committed stroke point; cleared whenever drawing stops.
    anchor: Option<Point>,
    drawing: bool,
    erasing: bool,
    hand_present: bool,
    /// Timestamp of the first hand-absent frame after presence.
    lost_at: Option<u64>,
    /// Finger count of the previous frame, for edge-triggered toggles.
    prev_count: Option<u8>,
}

impl GestureTracker {
    /// New tracker with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// New tracker with custom configuration.
    #[must_use]
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            smoothed: None,
            anchor: None,
            drawing: false,
            erasing: false,
            hand_present: false,
            lost_at: None,
            prev_count: None,
        }
    }

    /// Whether erase mode is currently on.
    #[must_use]
    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    /// Whether drawing is currently enabled.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Process one camera tick.
    ///
    /// `surface_width`/`surface_height` give the drawing target's pixel
    /// dimensions for coordinate mapping.
    pub fn track(
        &mut self,
        frame: &GestureFrame,
        surface_width: u32,
        surface_height: u32,
    ) -> GestureUpdate {
        let Some(landmarks) = frame.hand() else {
            self.handle_absent(frame.timestamp_ms);
            return GestureUpdate::idle(self.smoothed, self.drawing, self.erasing);
        };

        self.hand_present = true;
        self.lost_at = None;

        let count = count_extended_fingers(landmarks);
        match count {
            1 => self.drawing = true,
            2 => self.drawing = false,
            // Edge-triggered: flips once on the transition into three
            // fingers, not every frame the pose is held.
            3 => {
                if self.prev_count != Some(3) {
                    self.erasing = !self.erasing;
                    tracing::debug!("Erase mode toggled: {}", self.erasing);
                }
            }
            _ => {}
        }
        self.prev_count = Some(count);

        // Normalized tip -> camera frame pixels -> surface pixels.
        let tip = landmarks[TRACKED_TIP];
        let mut x = tip.x * frame.frame_width as f32;
        let mut y = tip.y * frame.frame_height as f32;
        x *= surface_width as f32 / frame.frame_width as f32;
        y *= surface_height as f32 / frame.frame_height as f32;

        let alpha = self.config.smoothing;
        let smoothed = match self.smoothed {
            None => Point::new(x, y),
            Some(prev) => Point::new(
                alpha * x + (1.0 - alpha) * prev.x,
                alpha * y + (1.0 - alpha) * prev.y,
            ),
        };
        self.smoothed = Some(smoothed);

        if self.drawing {
            // No anchor means a fresh run: the segment degenerates to a dot.
            let from = self.anchor.unwrap_or(smoothed);
            let starts_stroke = self.anchor.is_none();
            let segment = StrokeSegment {
                from,
                to: smoothed,
                width: if self.erasing {
                    self.config.erase_width
                } else {
                    self.config.draw_width
                },
                color: self.config.draw_color,
                erase: self.erasing,
            };
            self.anchor = Some(smoothed);
            GestureUpdate {
                point: Some(smoothed),
                segment: Some(segment),
                starts_stroke,
                drawing: true,
                erasing: self.erasing,
            }
        } else {
            self.anchor = None;
            GestureUpdate::idle(Some(smoothed), false, self.erasing)
        }
    }

    /// Hand-absent bookkeeping: once the grace delay elapses without
    /// reacquisition, smoothing and the anchor reset so the next stroke
    /// cannot stitch back to stale geometry.
    fn handle_absent(&mut self, timestamp_ms: u64) {
        if !self.hand_present {
            return;
        }
        match self.lost_at {
            None => self.lost_at = Some(timestamp_ms),
            Some(lost_at) => {
                if timestamp_ms.saturating_sub(lost_at) >= self.config.grace_ms {
                    self.smoothed = None;
                    self.anchor = None;
                    self.hand_present = false;
                    self.lost_at = None;
                    self.prev_count = None;
                    tracing::debug!("Hand lost beyond grace, tracking state reset");
                }
            }
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}
