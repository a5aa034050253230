//! Pure shape compositions painted through [`Surface`] primitives.
//!
//! Each function paints one fixed geometric composition at an anchor point.
//! A call is a single atomic surface mutation with no partial-paint failure
//! mode; invalid sizes (`size <= 0`) paint nothing.

use std::f32::consts::PI;

use crate::intent::{DrawIntent, Shape};
use crate::surface::{Color, Point, Surface};

/// Placeholder marker radius in pixels.
const PLACEHOLDER_RADIUS: f32 = 30.0;

/// Dispatch a resolved intent to the matching shape painter.
pub fn draw_shape<S: Surface>(surface: &mut S, intent: &DrawIntent, anchor: Point) {
    let DrawIntent { shape, size, color } = *intent;
    match shape {
        Shape::Tree => draw_tree(surface, anchor, size),
        Shape::Mountain => draw_mountain(surface, anchor, size),
        Shape::Sun => draw_sun(surface, anchor, size, color),
        Shape::Circle => draw_circle(surface, anchor, size, color),
        Shape::Curve => draw_curve(surface, anchor, size, color),
        Shape::Line => draw_line(surface, anchor, size, color),
    }
}

/// Sienna trunk plus three stacked foliage discs. Always green; spoken
/// colors do not recolor trees.
pub fn draw_tree<S: Surface>(surface: &mut S, anchor: Point, size: f32) {
    if size <= 0.0 {
        return;
    }
    let Point { x, y } = anchor;
    surface.fill_rect(
        Point::new(x - size / 10.0, y - size / 2.0),
        size / 5.0,
        size / 2.0,
        Color::SIENNA,
    );
    surface.fill_circle(Point::new(x, y - size / 1.2), size / 2.0, Color::GREEN);
    surface.fill_circle(
        Point::new(x - size / 3.0, y - size / 1.5),
        size / 2.5,
        Color::GREEN,
    );
    surface.fill_circle(
        Point::new(x + size / 3.0, y - size / 1.5),
        size / 2.5,
        Color::GREEN,
    );
}

/// Gray peak with a white snowy cap.
pub fn draw_mountain<S: Surface>(surface: &mut S, anchor: Point, size: f32) {
    if size <= 0.0 {
        return;
    }
    let Point { x, y } = anchor;
    surface.fill_triangle(
        Point::new(x - size, y + size / 2.0),
        Point::new(x, y - size),
        Point::new(x + size, y + size / 2.0),
        Color::GRAY,
    );
    surface.fill_triangle(
        Point::new(x - size / 4.0, y - size / 4.0),
        Point::new(x, y - size),
        Point::new(x + size / 4.0, y - size / 4.0),
        Color::WHITE,
    );
}

/// Filled disc with twelve rays at 30 degree steps, reaching from
/// `size/2 + 5` to `size/2 + 15` pixels out.
pub fn draw_sun<S: Surface>(surface: &mut S, anchor: Point, size: f32, color: Color) {
    if size <= 0.0 {
        return;
    }
    let Point { x, y } = anchor;
    surface.fill_circle(anchor, size / 2.0, color);
    for i in 0..12 {
        let angle = i as f32 * PI / 6.0;
        let (sin, cos) = angle.sin_cos();
        let inner = size / 2.0 + 5.0;
        let outer = size / 2.0 + 15.0;
        surface.stroke_line(
            Point::new(x + cos * inner, y + sin * inner),
            Point::new(x + cos * outer, y + sin * outer),
            2.0,
            color,
        );
    }
}

/// Stroked circle of radius `size/2`.
pub fn draw_circle<S: Surface>(surface: &mut S, anchor: Point, size: f32, color: Color) {
    if size <= 0.0 {
        return;
    }
    surface.stroke_circle(anchor, size / 2.0, 3.0, color);
}

/// Quadratic arc spanning `2*size`, peaking `size` above the anchor.
pub fn draw_curve<S: Surface>(surface: &mut S, anchor: Point, size: f32, color: Color) {
    if size <= 0.0 {
        return;
    }
    let Point { x, y } = anchor;
    surface.stroke_quad_curve(
        Point::new(x - size, y),
        Point::new(x, y - size),
        Point::new(x + size, y),
        3.0,
        color,
    );
}

/// Horizontal line of length `size` centered on the anchor.
pub fn draw_line<S: Surface>(surface: &mut S, anchor: Point, size: f32, color: Color) {
    if size <= 0.0 {
        return;
    }
    let Point { x, y } = anchor;
    surface.stroke_line(
        Point::new(x - size / 2.0, y),
        Point::new(x + size / 2.0, y),
        3.0,
        color,
    );
}

/// Neutral placeholder marker for an unrecognized word: a light-gray disc
/// with a black outline and the literal word as a label.
pub fn draw_placeholder<S: Surface>(surface: &mut S, word: &str, anchor: Point) {
    surface.fill_circle(anchor, PLACEHOLDER_RADIUS, Color::LIGHT_GRAY);
    surface.stroke_circle(anchor, PLACEHOLDER_RADIUS, 1.0, Color::BLACK);
    surface.draw_label(
        word,
        Point::new(anchor.x - 20.0, anchor.y + 5.0),
        Color::BLACK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::mock::{MockSurface, PaintOp};

    const ANCHOR: Point = Point::new(450.0, 260.0);

    #[test]
    fn sun_paints_disc_plus_twelve_rays() {
        let mut surface = MockSurface::new();
        draw_sun(&mut surface, ANCHOR, 60.0, Color::YELLOW);
        assert_eq!(surface.ops.len(), 13);
        assert!(matches!(surface.ops[0], PaintOp::FillCircle(_, r, _) if (r - 30.0).abs() < 1e-3));
        let rays = surface.ops[1..]
            .iter()
            .filter(|op| matches!(op, PaintOp::Line(..)))
            .count();
        assert_eq!(rays, 12);
        // First ray points along +x: from r+5 to r+15.
        if let PaintOp::Line(from, to, width, _) = surface.ops[1].clone() {
            assert!((from.x - (ANCHOR.x + 35.0)).abs() < 1e-3);
            assert!((to.x - (ANCHOR.x + 45.0)).abs() < 1e-3);
            assert!((width - 2.0).abs() < f32::EPSILON);
        } else {
            panic!("expected a ray line");
        }
    }

    #[test]
    fn tree_is_trunk_plus_three_foliage_circles() {
        let mut surface = MockSurface::new();
        draw_tree(&mut surface, ANCHOR, 60.0);
        assert!(matches!(
            surface.ops[0],
            PaintOp::FillRect(_, _, _, Color::SIENNA)
        ));
        let foliage: Vec<_> = surface
            .ops
            .iter()
            .filter(|op| matches!(op, PaintOp::FillCircle(_, _, Color::GREEN)))
            .collect();
        assert_eq!(foliage.len(), 3);
    }

    #[test]
    fn mountain_is_rock_plus_snow_cap() {
        let mut surface = MockSurface::new();
        draw_mountain(&mut surface, ANCHOR, 80.0);
        assert_eq!(surface.ops.len(), 2);
        assert!(matches!(surface.ops[0], PaintOp::FillTriangle(_, _, _, Color::GRAY)));
        assert!(matches!(surface.ops[1], PaintOp::FillTriangle(_, _, _, Color::WHITE)));
    }

    #[test]
    fn circle_strokes_at_half_size_radius() {
        let mut surface = MockSurface::new();
        draw_circle(&mut surface, ANCHOR, 120.0, Color::RED);
        assert!(
            matches!(surface.ops[0], PaintOp::StrokeCircle(_, r, _, Color::RED) if (r - 60.0).abs() < 1e-3)
        );
    }

    #[test]
    fn zero_or_negative_size_paints_nothing() {
        let mut surface = MockSurface::new();
        draw_tree(&mut surface, ANCHOR, 0.0);
        draw_mountain(&mut surface, ANCHOR, -1.0);
        draw_sun(&mut surface, ANCHOR, 0.0, Color::YELLOW);
        draw_circle(&mut surface, ANCHOR, -5.0, Color::RED);
        draw_curve(&mut surface, ANCHOR, 0.0, Color::RED);
        draw_line(&mut surface, ANCHOR, 0.0, Color::RED);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn placeholder_is_disc_outline_and_label() {
        let mut surface = MockSurface::new();
        draw_placeholder(&mut surface, "banana", ANCHOR);
        assert!(matches!(
            surface.ops[0],
            PaintOp::FillCircle(_, r, Color::LIGHT_GRAY) if (r - 30.0).abs() < 1e-3
        ));
        assert!(matches!(surface.ops[1], PaintOp::StrokeCircle(..)));
        match &surface.ops[2] {
            PaintOp::Label(word, origin, Color::BLACK) => {
                assert_eq!(word, "banana");
                assert!((origin.x - (ANCHOR.x - 20.0)).abs() < 1e-3);
                assert!((origin.y - (ANCHOR.y + 5.0)).abs() < 1e-3);
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn dispatch_routes_every_shape() {
        for shape in [
            Shape::Tree,
            Shape::Mountain,
            Shape::Sun,
            Shape::Circle,
            Shape::Curve,
            Shape::Line,
        ] {
            let mut surface = MockSurface::new();
            let intent = DrawIntent {
                shape,
                size: 60.0,
                color: Color::WHITE,
            };
            draw_shape(&mut surface, &intent, ANCHOR);
            assert!(!surface.ops.is_empty(), "{shape:?} painted nothing");
        }
    }
}
