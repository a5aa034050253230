//! # Easel Core
//!
//! Core logic for the Easel multi-modal drawing canvas. Three input
//! modalities (pointer, voice command, and camera hand-tracking) are
//! interpreted into deterministic drawing operations over one shared
//! raster surface, with a bounded undo/redo history across all of them.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 easel-core                   │
//! ├──────────────────────┬───────────────────────┤
//! │  Command Interpreter │  Gesture Interpreter  │
//! │  - keyword detection │  - finger counting    │
//! │  - intent resolution │  - smoothing + grace  │
//! ├──────────────────────┼───────────────────────┤
//! │  Session dispatcher  │  History Manager      │
//! │  - serialized events │  - bounded undo/redo  │
//! │  - shape composition │  - snapshot eviction  │
//! └──────────────────────┴───────────────────────┘
//! ```
//!
//! Pixels live behind the [`Surface`] trait; the raster implementation is
//! provided by `easel-renderer`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod command;
pub mod error;
pub mod event;
pub mod gesture;
pub mod history;
pub mod intent;
pub mod session;
pub mod shapes;
pub mod surface;

pub use command::{interpret, InterpreterDefaults};
pub use error::{EaselError, EaselResult};
pub use event::{
    GestureFrame, InputEvent, Landmark, PointerEvent, PointerPhase, VoiceEvent,
    HAND_LANDMARK_COUNT,
};
pub use gesture::{GestureConfig, GestureTracker, GestureUpdate};
pub use history::{History, HISTORY_CAPACITY};
pub use intent::{DrawIntent, Shape, SizeClass, SystemCommand, VoiceAction};
pub use session::{Effect, PlaceholderRecord, Session, SessionConfig};
pub use surface::{Color, Point, Snapshot, StrokeSegment, Surface};

/// Easel core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
