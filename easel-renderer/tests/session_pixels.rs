//! End-to-end tests: a drawing session running over the real rasterizer.
//!
//! These exercise the full path from input events to pixels, including
//! history restore over PNG snapshots and gesture stroke isolation.

use easel_core::{
    Color, Effect, GestureFrame, InputEvent, Landmark, PointerEvent, PointerPhase, Session,
    Surface, SystemCommand, VoiceEvent, HAND_LANDMARK_COUNT,
};
use easel_renderer::RasterSurface;

const SURFACE_W: u32 = 900;
const SURFACE_H: u32 = 520;
const FRAME_W: u32 = 640;
const FRAME_H: u32 = 480;

const BG: Color = Color::BACKGROUND;

fn session() -> Session<RasterSurface> {
    Session::new(RasterSurface::new(SURFACE_W, SURFACE_H))
}

fn voice(transcript: &str) -> InputEvent {
    InputEvent::Voice(VoiceEvent::final_result(transcript, 0))
}

fn pointer(x: f32, y: f32, phase: PointerPhase) -> InputEvent {
    InputEvent::Pointer(PointerEvent { x, y, phase })
}

/// A complete hand with one extended finger (draw pose) and the index tip
/// at normalized (x, y). Landmark indices follow the MediaPipe layout.
fn draw_frame(x: f32, y: f32, timestamp_ms: u64) -> InputEvent {
    let mut landmarks = vec![Landmark { x: 0.5, y: 0.5, z: 0.0 }; HAND_LANDMARK_COUNT];
    // Fold middle, ring and pinky below their base joints; tuck the thumb.
    for (tip, mcp) in [(12, 9), (16, 13), (20, 17)] {
        landmarks[tip].y = 0.7;
        landmarks[mcp].y = 0.5;
    }
    landmarks[3].x = 0.5;
    landmarks[4].x = 0.6;
    // Index finger extended, tip at the requested position.
    landmarks[8].x = x;
    landmarks[8].y = y;
    landmarks[5].y = y + 0.2;
    InputEvent::Gesture(GestureFrame {
        landmarks,
        frame_width: FRAME_W,
        frame_height: FRAME_H,
        timestamp_ms,
    })
}

fn hand_absent(timestamp_ms: u64) -> InputEvent {
    InputEvent::Gesture(GestureFrame::absent(FRAME_W, FRAME_H, timestamp_ms))
}

#[test]
fn voice_circle_paints_red_rim_at_cursor() {
    let mut session = session();
    let effects = session.process_event(&voice("draw a big red circle")).unwrap();
    assert!(effects.is_empty());
    // Cursor starts at the surface center; big = 120 px, so the rim sits
    // 60 px out from (450, 260).
    assert_eq!(session.surface().pixel(510, 260), Color::RED);
    assert_eq!(session.surface().pixel(450, 260), BG);
}

#[test]
fn undo_and_redo_are_bit_identical_over_png_snapshots() {
    let mut session = session();
    let blank = session.surface().snapshot().unwrap();

    session.process_event(&voice("big red circle")).unwrap();
    let drawn = session.surface().snapshot().unwrap();
    assert_ne!(drawn, blank);

    session
        .process_event(&InputEvent::System(SystemCommand::Undo))
        .unwrap();
    assert_eq!(session.surface().snapshot().unwrap(), blank);

    session
        .process_event(&InputEvent::System(SystemCommand::Redo))
        .unwrap();
    assert_eq!(session.surface().snapshot().unwrap(), drawn);
}

#[test]
fn pointer_drag_paints_and_undo_reverts_the_whole_drag() {
    let mut session = session();
    let blank = session.surface().snapshot().unwrap();

    session.process_event(&pointer(100.0, 100.0, PointerPhase::Down)).unwrap();
    session.process_event(&pointer(200.0, 100.0, PointerPhase::Move)).unwrap();
    session.process_event(&pointer(200.0, 200.0, PointerPhase::Move)).unwrap();
    session.process_event(&pointer(200.0, 200.0, PointerPhase::Up)).unwrap();

    assert_eq!(session.surface().pixel(150, 100), Color::WHITE);
    assert_eq!(session.surface().pixel(200, 150), Color::WHITE);

    session
        .process_event(&InputEvent::System(SystemCommand::Undo))
        .unwrap();
    assert_eq!(session.surface().snapshot().unwrap(), blank);
}

#[test]
fn gesture_strokes_do_not_bridge_across_hand_loss() {
    let mut session = session();

    // Stroke near the upper left corner.
    for t in 0..5u64 {
        session.process_event(&draw_frame(0.1, 0.1, t * 33)).unwrap();
    }
    // Hand vanishes for well over the 150 ms grace window.
    session.process_event(&hand_absent(200)).unwrap();
    session.process_event(&hand_absent(400)).unwrap();
    // Reacquired at the opposite corner, still in draw mode.
    for t in 0..5u64 {
        session.process_event(&draw_frame(0.9, 0.9, 500 + t * 33)).unwrap();
    }

    // Both stroke sites carry ink; nothing connects them through the middle.
    assert_eq!(session.surface().pixel(90, 52), Color::WHITE);
    assert_eq!(session.surface().pixel(810, 468), Color::WHITE);
    assert_eq!(session.surface().pixel(450, 260), BG);
}

#[test]
fn one_undo_removes_one_whole_gesture_stroke() {
    let mut session = session();
    let blank = session.surface().snapshot().unwrap();

    for t in 0..6u64 {
        session
            .process_event(&draw_frame(0.1 + 0.1 * t as f32 / 6.0, 0.5, t * 33))
            .unwrap();
    }
    assert_ne!(session.surface().snapshot().unwrap(), blank);

    session
        .process_event(&InputEvent::System(SystemCommand::Undo))
        .unwrap();
    assert_eq!(session.surface().snapshot().unwrap(), blank);
}

#[test]
fn unknown_word_paints_placeholder_and_reports_it() {
    let mut session = session();
    let effects = session.process_event(&voice("banana")).unwrap();

    let [Effect::PlaceholderRecorded(record)] = effects.as_slice() else {
        panic!("expected exactly one placeholder effect, got {effects:?}");
    };
    assert_eq!(record.word, "banana");

    // Light gray marker disc at the cursor, black label pixels below center.
    assert_eq!(session.surface().pixel(450, 260), Color::LIGHT_GRAY);
    let label_pixels = (430..470)
        .flat_map(|x| (265..273).map(move |y| (x, y)))
        .filter(|&(x, y)| session.surface().pixel(x, y) == Color::BLACK)
        .count();
    assert!(label_pixels > 10, "expected label ink, found {label_pixels} pixels");
}

#[test]
fn save_command_emits_the_current_snapshot() {
    let mut session = session();
    session.process_event(&voice("small yellow sun")).unwrap();
    let current = session.surface().snapshot().unwrap();

    let effects = session
        .process_event(&InputEvent::System(SystemCommand::Save))
        .unwrap();
    let [Effect::SaveRequested(snapshot)] = effects.as_slice() else {
        panic!("expected exactly one save effect, got {effects:?}");
    };
    assert_eq!(*snapshot, current);
}

#[test]
fn clear_then_undo_brings_the_drawing_back() {
    let mut session = session();
    session.process_event(&voice("green tree")).unwrap();
    let drawn = session.surface().snapshot().unwrap();

    session.process_event(&voice("clear")).unwrap();
    assert_ne!(session.surface().snapshot().unwrap(), drawn);

    session
        .process_event(&InputEvent::System(SystemCommand::Undo))
        .unwrap();
    assert_eq!(session.surface().snapshot().unwrap(), drawn);
}
