//! The drawing session: one dispatcher over all three input modalities.
//!
//! All adapters funnel into [`Session::process_event`], which runs events
//! strictly in arrival order. The session is the only mutator of the surface
//! and the history, so no locking is needed; interleaved callbacks become a
//! serialized event stream.
//!
//! History checkpoints capture the surface state just before each mutating
//! action (start of a stroke run, shape dispatch, clear), so one undo step
//! reverts one user-visible action.

use serde::{Deserialize, Serialize};

use crate::command::{interpret, InterpreterDefaults};
use crate::error::EaselResult;
use crate::event::{GestureFrame, InputEvent, PointerEvent, PointerPhase, VoiceEvent};
use crate::gesture::{GestureConfig, GestureTracker};
use crate::history::{History, HISTORY_CAPACITY};
use crate::intent::{SystemCommand, VoiceAction};
use crate::shapes;
use crate::surface::{Color, Point, Snapshot, StrokeSegment, Surface};

/// Session-wide configuration.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Color for shapes when the transcript names none.
    pub default_color: Color,
    /// Pixel size for shapes when the transcript names none.
    pub default_size: f32,
    /// Initial freehand pointer stroke width.
    pub pointer_width: f32,
    /// Initial freehand pointer stroke color.
    pub pointer_color: Color,
    /// Undo depth.
    pub history_capacity: usize,
    /// Gesture tracking parameters.
    pub gesture: GestureConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_color: Color::WHITE,
            default_size: 60.0,
            pointer_width: 5.0,
            pointer_color: Color::WHITE,
            history_capacity: HISTORY_CAPACITY,
            gesture: GestureConfig::default(),
        }
    }
}

/// Metadata for an unrecognized voice token, forwarded to the persistence
/// collaborator fire-and-forget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderRecord {
    /// The unrecognized word, verbatim.
    pub word: String,
    /// Marker X position in surface pixels.
    pub x: f32,
    /// Marker Y position in surface pixels.
    pub y: f32,
    /// The size that was in effect for the command.
    pub size: f32,
}

/// Side effects the session asks its collaborators to perform.
///
/// The session never talks to the network itself; the adapter layer drains
/// these after each event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Persist this surface snapshot.
    SaveRequested(Snapshot),
    /// Record placeholder metadata for an unrecognized word.
    PlaceholderRecorded(PlaceholderRecord),
}

/// A drawing session over one surface.
#[derive(Debug)]
pub struct Session<S: Surface> {
    surface: S,
    history: History<Snapshot>,
    tracker: GestureTracker,
    config: SessionConfig,
    /// Last committed drawing point; anchors voice-triggered shapes.
    cursor: Point,
    /// Current freehand pointer anchor, None between strokes.
    pointer_anchor: Option<Point>,
    /// Whether the current pointer run has painted (and checkpointed) yet.
    pointer_painted: bool,
    /// Live pointer brush color, adjustable mid-session (palette swatches).
    pointer_color: Color,
    /// Live pointer brush width, adjustable mid-session (size slider).
    pointer_width: f32,
    /// Whether the pointer eraser is on; segments composite the background.
    pointer_erase: bool,
}

impl<S: Surface> Session<S> {
    /// New session with default configuration.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, SessionConfig::default())
    }

    /// New session with custom configuration. The cursor starts at the
    /// surface center.
    #[must_use]
    pub fn with_config(surface: S, config: SessionConfig) -> Self {
        let cursor = Point::new(surface.width() as f32 / 2.0, surface.height() as f32 / 2.0);
        Self {
            history: History::with_capacity(config.history_capacity),
            tracker: GestureTracker::with_config(config.gesture),
            surface,
            cursor,
            pointer_anchor: None,
            pointer_painted: false,
            pointer_color: config.pointer_color,
            pointer_width: config.pointer_width,
            pointer_erase: false,
            config,
        }
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The current cursor position.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Undo entries currently retained.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Redo entries currently retained.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Set the pointer brush color. Takes effect from the next segment.
    pub fn set_pointer_color(&mut self, color: Color) {
        self.pointer_color = color;
    }

    /// Set the pointer brush width. Takes effect from the next segment.
    pub fn set_pointer_width(&mut self, width: f32) {
        self.pointer_width = width;
    }

    /// Turn the pointer eraser on or off. While on, pointer segments paint
    /// with background compositing, like gesture erase strokes.
    pub fn set_pointer_erase(&mut self, erase: bool) {
        self.pointer_erase = erase;
    }

    /// Whether the pointer eraser is currently on.
    #[must_use]
    pub fn pointer_erase(&self) -> bool {
        self.pointer_erase
    }

    /// Process one input event, in arrival order.
    ///
    /// Returns the side effects the adapter layer should forward to the
    /// persistence collaborator.
    ///
    /// # Errors
    ///
    /// Fails only when a surface snapshot cannot be captured or restored;
    /// unrecognized input is never an error.
    pub fn process_event(&mut self, event: &InputEvent) -> EaselResult<Vec<Effect>> {
        match event {
            InputEvent::Pointer(pointer) => {
                self.handle_pointer(*pointer)?;
                Ok(Vec::new())
            }
            InputEvent::Voice(voice) => self.handle_voice(voice),
            InputEvent::Gesture(frame) => {
                self.handle_gesture(frame)?;
                Ok(Vec::new())
            }
            InputEvent::System(command) => self.run_command(*command),
        }
    }

    /// Record the current surface state, to be restored by the next undo.
    fn checkpoint(&mut self) -> EaselResult<()> {
        let snapshot = self.surface.snapshot()?;
        self.history.record(snapshot);
        Ok(())
    }

    fn handle_pointer(&mut self, pointer: PointerEvent) -> EaselResult<()> {
        let point = Point::new(pointer.x, pointer.y);
        match pointer.phase {
            PointerPhase::Down => {
                self.cursor = point;
                self.pointer_anchor = Some(point);
                self.pointer_painted = false;
            }
            PointerPhase::Move => {
                // Moves without a preceding Down are hover, not drawing.
                let Some(anchor) = self.pointer_anchor else {
                    return Ok(());
                };
                if !self.pointer_painted {
                    self.checkpoint()?;
                    self.pointer_painted = true;
                }
                self.surface.stroke_segment(&StrokeSegment {
                    from: anchor,
                    to: point,
                    width: self.pointer_width,
                    color: self.pointer_color,
                    erase: self.pointer_erase,
                });
                self.pointer_anchor = Some(point);
                self.cursor = point;
            }
            PointerPhase::Up => {
                self.pointer_anchor = None;
                self.pointer_painted = false;
            }
        }
        Ok(())
    }

    fn handle_voice(&mut self, voice: &VoiceEvent) -> EaselResult<Vec<Effect>> {
        if !voice.is_final {
            return Ok(Vec::new());
        }
        let defaults = InterpreterDefaults {
            color: self.config.default_color,
            size: self.config.default_size,
        };
        match interpret(&voice.transcript, defaults) {
            VoiceAction::Draw(intent) => {
                self.checkpoint()?;
                shapes::draw_shape(&mut self.surface, &intent, self.cursor);
                Ok(Vec::new())
            }
            VoiceAction::System(command) => self.run_command(command),
            VoiceAction::Placeholder { word, size } => {
                self.checkpoint()?;
                shapes::draw_placeholder(&mut self.surface, &word, self.cursor);
                let record = PlaceholderRecord {
                    word,
                    x: self.cursor.x,
                    y: self.cursor.y,
                    size,
                };
                Ok(vec![Effect::PlaceholderRecorded(record)])
            }
            VoiceAction::Ignored => Ok(Vec::new()),
        }
    }

    fn handle_gesture(&mut self, frame: &GestureFrame) -> EaselResult<()> {
        let update = self
            .tracker
            .track(frame, self.surface.width(), self.surface.height());
        if let Some(segment) = update.segment {
            if update.starts_stroke {
                self.checkpoint()?;
            }
            self.surface.stroke_segment(&segment);
            self.cursor = segment.to;
        }
        Ok(())
    }

    fn run_command(&mut self, command: SystemCommand) -> EaselResult<Vec<Effect>> {
        match command {
            SystemCommand::Clear => {
                self.checkpoint()?;
                self.surface.clear();
                Ok(Vec::new())
            }
            SystemCommand::Undo => {
                if self.history.can_undo() {
                    let current = self.surface.snapshot()?;
                    if let Some(previous) = self.history.undo(current) {
                        self.surface.restore(&previous)?;
                    }
                }
                Ok(Vec::new())
            }
            SystemCommand::Redo => {
                if self.history.can_redo() {
                    let current = self.surface.snapshot()?;
                    if let Some(next) = self.history.redo(current) {
                        self.surface.restore(&next)?;
                    }
                }
                Ok(Vec::new())
            }
            SystemCommand::Save => Ok(vec![Effect::SaveRequested(self.surface.snapshot()?)]),
        }
    }
}
