//! Software raster surface over an RGBA pixel buffer.
//!
//! All painting is plain CPU pixel work: Bresenham line walking with disc
//! stamping for round caps, scanline fills for solid primitives, and a
//! flattened Bézier for curves. Erase compositing paints the background
//! color, so snapshots always capture exactly what restore reproduces.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use easel_core::{Color, EaselResult, Point, Snapshot, StrokeSegment, Surface};

use crate::error::RenderError;
use crate::font;

/// Number of straight segments a quadratic curve flattens into.
const CURVE_STEPS: u32 = 32;

/// The mutable raster drawing target backed by an RGBA image.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixels: RgbaImage,
    background: Color,
}

impl RasterSurface {
    /// New surface filled with the default dark background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::BACKGROUND)
    }

    /// New surface filled with a custom background color.
    #[must_use]
    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        let fill = Rgba([background.r, background.g, background.b, background.a]);
        Self {
            pixels: RgbaImage::from_pixel(width, height, fill),
            background,
        }
    }

    /// The background color erase strokes and `clear` paint with.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Read one pixel. Out-of-bounds reads return the background color.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return self.background;
        }
        let Rgba([r, g, b, a]) = *self.pixels.get_pixel(x, y);
        Color { r, g, b, a }
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return;
        }
        self.pixels
            .put_pixel(x, y, Rgba([color.r, color.g, color.b, color.a]));
    }

    /// Stamp a filled disc; the building block for thick round-capped lines.
    fn stamp_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let r = radius.max(0.5);
        let r2 = r * r;
        let span = r.ceil() as i64;
        let (ix, iy) = (cx.round() as i64, cy.round() as i64);
        for dy in -span..=span {
            for dx in -span..=span {
                if (dx * dx + dy * dy) as f32 <= r2 {
                    self.put(ix + dx, iy + dy, color);
                }
            }
        }
    }

    /// Walk a line with Bresenham, stamping a disc at every step.
    fn thick_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let radius = width / 2.0;
        let (mut x0, mut y0) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.stamp_disc(x0 as f32, y0 as f32, radius, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn clear(&mut self) {
        let fill = Rgba([
            self.background.r,
            self.background.g,
            self.background.b,
            self.background.a,
        ]);
        for pixel in self.pixels.pixels_mut() {
            *pixel = fill;
        }
    }

    fn stroke_segment(&mut self, segment: &StrokeSegment) {
        let color = if segment.erase {
            self.background
        } else {
            segment.color
        };
        self.thick_line(segment.from, segment.to, segment.width, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.stamp_disc(center.x, center.y, radius, color);
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        let half = (width / 2.0).max(0.5);
        let outer = radius + half;
        let min_x = (center.x - outer).floor() as i64;
        let max_x = (center.x + outer).ceil() as i64;
        let min_y = (center.y - outer).floor() as i64;
        let max_y = (center.y + outer).ceil() as i64;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 - center.x;
                let dy = y as f32 - center.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if (dist - radius).abs() <= half {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn fill_rect(&mut self, origin: Point, width: f32, height: f32, color: Color) {
        let min_x = origin.x.round() as i64;
        let min_y = origin.y.round() as i64;
        let max_x = (origin.x + width).round() as i64;
        let max_y = (origin.y + height).round() as i64;
        for y in min_y..max_y {
            for x in min_x..max_x {
                self.put(x, y, color);
            }
        }
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        let edge = |p0: Point, p1: Point, x: f32, y: f32| {
            (p1.x - p0.x) * (y - p0.y) - (p1.y - p0.y) * (x - p0.x)
        };
        let min_x = a.x.min(b.x).min(c.x).floor() as i64;
        let max_x = a.x.max(b.x).max(c.x).ceil() as i64;
        let min_y = a.y.min(b.y).min(c.y).floor() as i64;
        let max_y = a.y.max(b.y).max(c.y).ceil() as i64;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(a, b, px, py);
                let w1 = edge(b, c, px, py);
                let w2 = edge(c, a, px, py);
                let inside =
                    (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0) || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0);
                if inside {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.thick_line(from, to, width, color);
    }

    fn stroke_quad_curve(
        &mut self,
        from: Point,
        control: Point,
        to: Point,
        width: f32,
        color: Color,
    ) {
        let mut prev = from;
        for step in 1..=CURVE_STEPS {
            let t = step as f32 / CURVE_STEPS as f32;
            let u = 1.0 - t;
            let x = u * u * from.x + 2.0 * u * t * control.x + t * t * to.x;
            let y = u * u * from.y + 2.0 * u * t * control.y + t * t * to.y;
            let next = Point::new(x, y);
            self.thick_line(prev, next, width, color);
            prev = next;
        }
    }

    fn draw_label(&mut self, text: &str, origin: Point, color: Color) {
        let mut x = origin.x.round() as i64;
        let y = origin.y.round() as i64;
        for ch in text.chars() {
            if let Some(rows) = font::glyph(ch) {
                for (row_index, row_bits) in rows.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if row_bits & (1 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                            self.put(x + col, y + row_index as i64, color);
                        }
                    }
                }
            }
            x += font::GLYPH_ADVANCE;
        }
    }

    fn snapshot(&self) -> EaselResult<Snapshot> {
        let mut bytes = Cursor::new(Vec::new());
        self.pixels
            .write_to(&mut bytes, ImageFormat::Png)
            .map_err(RenderError::Encode)?;
        Ok(Snapshot::from_bytes(bytes.into_inner()))
    }

    fn restore(&mut self, snapshot: &Snapshot) -> EaselResult<()> {
        let decoded = image::load_from_memory(snapshot.as_bytes())
            .map_err(|e| RenderError::Decode(e.to_string()))?
            .to_rgba8();
        if decoded.dimensions() != self.pixels.dimensions() {
            let (found_width, found_height) = decoded.dimensions();
            return Err(RenderError::DimensionMismatch {
                found_width,
                found_height,
                width: self.pixels.width(),
                height: self.pixels.height(),
            }
            .into());
        }
        self.pixels = decoded;
        tracing::trace!("Raster surface restored from {} byte snapshot", snapshot.len());
        Ok(())
    }
}
