//! The surface contract: the raster drawing target all interpreters mutate.
//!
//! `easel-core` never touches pixels directly. Everything that paints goes
//! through the [`Surface`] trait, and everything that undoes goes through
//! opaque [`Snapshot`]s. The raster implementation lives in `easel-renderer`.

use serde::{Deserialize, Serialize};

use crate::error::EaselResult;

/// A point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position in pixels.
    pub x: f32,
    /// Y position in pixels.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS `red`.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// CSS `green`.
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    /// CSS `blue`.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// CSS `yellow`.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// CSS `black`.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// CSS `white`.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// CSS `orange`.
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    /// CSS `purple`.
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    /// CSS `sienna`, used for tree trunks.
    pub const SIENNA: Self = Self::rgb(160, 82, 45);
    /// CSS `gray`, used for mountain rock.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// CSS `lightgray`, used for placeholder markers.
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    /// Default canvas background (dark slate).
    pub const BACKGROUND: Self = Self::rgb(0x0b, 0x12, 0x20);

    /// Resolve a spoken color name from the fixed voice palette.
    ///
    /// Only the eight colors the command interpreter recognizes resolve;
    /// composition colors like sienna are not spoken.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "yellow" => Some(Self::YELLOW),
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "orange" => Some(Self::ORANGE),
            "purple" => Some(Self::PURPLE),
            _ => None,
        }
    }
}

/// One unit of continuous freehand drawing: a line from the previous
/// committed point to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeSegment {
    /// Segment start.
    pub from: Point,
    /// Segment end.
    pub to: Point,
    /// Stroke width in pixels.
    pub width: f32,
    /// Stroke color (ignored when erasing).
    pub color: Color,
    /// Erase compositing: paint with the background color instead.
    pub erase: bool,
}

/// An opaque encoded surface snapshot.
///
/// The encoding belongs to the surface implementation (PNG for the raster
/// surface). Restoring a snapshot reproduces the captured pixels exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot(Vec<u8>);

impl Snapshot {
    /// Wrap already-encoded snapshot bytes.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encoded length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot holds no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The mutable raster drawing target.
///
/// All operations mutate in place; painting primitives cannot fail.
/// Snapshot capture and restore are the only fallible operations.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Reset every pixel to the background color.
    fn clear(&mut self);

    /// Paint one freehand stroke segment with round caps.
    fn stroke_segment(&mut self, segment: &StrokeSegment);

    /// Paint a filled disc.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Paint a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color);

    /// Paint a filled axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Point, width: f32, height: f32, color: Color);

    /// Paint a filled triangle.
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color);

    /// Paint a straight line.
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color);

    /// Paint a quadratic Bézier curve.
    fn stroke_quad_curve(&mut self, from: Point, control: Point, to: Point, width: f32, color: Color);

    /// Paint a short text label anchored at `origin`.
    fn draw_label(&mut self, text: &str, origin: Point, color: Color);

    /// Capture the current pixel content as an opaque snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EaselError::Surface`] if encoding fails.
    fn snapshot(&self) -> EaselResult<Snapshot>;

    /// Restore previously captured pixel content.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EaselError::Surface`] if the snapshot cannot be
    /// decoded or does not match the surface dimensions.
    fn restore(&mut self, snapshot: &Snapshot) -> EaselResult<()>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_palette_resolves_spoken_names() {
        assert_eq!(Color::from_name("red"), Some(Color::RED));
        assert_eq!(Color::from_name("purple"), Some(Color::PURPLE));
        assert_eq!(Color::from_name("sienna"), None);
        assert_eq!(Color::from_name("banana"), None);
    }

    #[test]
    fn snapshot_wraps_bytes() {
        let snap = Snapshot::from_bytes(vec![1, 2, 3]);
        assert_eq!(snap.as_bytes(), &[1, 2, 3]);
        assert_eq!(snap.len(), 3);
        assert!(!snap.is_empty());
    }
}
