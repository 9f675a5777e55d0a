//! CPU rasterizer
//!
//! Replays recorded paint commands onto a locked canvas. Shapes are rendered
//! from signed distances with a one-pixel antialiasing feather: a circle fill
//! covers pixels by `radius - distance`, a stroke covers pixels by
//! `width/2 - distance` to the flattened polyline.

use crate::color::Color;
use crate::context::{PaintCommand, StrokeStyle};
use crate::path::{Path, PathCommand, Point};
use crate::primitives::Circle;
use crate::surface::Canvas;

/// Segments per quadratic curve span. The loader's cord is ~200 px wide, so
/// this keeps flattening error well under a pixel.
const QUAD_SEGMENTS: u32 = 32;

/// Execute recorded commands against a canvas.
pub fn execute(commands: &[PaintCommand], canvas: &mut Canvas<'_>) {
    for command in commands {
        match command {
            PaintCommand::Clear { color } => canvas.fill(*color),
            PaintCommand::FillCircle { circle, color } => fill_circle(canvas, *circle, *color),
            PaintCommand::StrokePath { path, style } => stroke_path(canvas, path, *style),
        }
    }
}

/// Fill a circle with an antialiased edge.
pub fn fill_circle(canvas: &mut Canvas<'_>, circle: Circle, color: Color) {
    if circle.radius <= 0.0 {
        return;
    }
    let cx = circle.center.x;
    let cy = circle.center.y;
    let r = circle.radius;

    let x0 = (cx - r - 1.0).floor() as i32;
    let x1 = (cx + r + 1.0).ceil() as i32;
    let y0 = (cy - r - 1.0).floor() as i32;
    let y1 = (cy + r + 1.0).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = (r - dist + 0.5).clamp(0.0, 1.0);
            canvas.blend_pixel(x, y, color, coverage);
        }
    }
}

/// Stroke a path with an antialiased round-capped line.
pub fn stroke_path(canvas: &mut Canvas<'_>, path: &Path, style: StrokeStyle) {
    if style.width <= 0.0 {
        return;
    }
    for segment in flatten(path) {
        for window in segment.windows(2) {
            stroke_segment(canvas, window[0], window[1], style);
        }
    }
}

/// Flatten path commands into polylines, one per subpath.
fn flatten(path: &Path) -> Vec<Vec<Point>> {
    let mut polylines = Vec::new();
    let mut current = Vec::new();
    let mut cursor = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(p) => {
                if current.len() > 1 {
                    polylines.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
                current.push(p);
                cursor = p;
                subpath_start = p;
            }
            PathCommand::LineTo(p) => {
                current.push(p);
                cursor = p;
            }
            PathCommand::QuadTo { control, end } => {
                for i in 1..=QUAD_SEGMENTS {
                    let t = i as f32 / QUAD_SEGMENTS as f32;
                    current.push(quad_point(cursor, control, end, t));
                }
                cursor = end;
            }
            PathCommand::Close => {
                current.push(subpath_start);
                cursor = subpath_start;
            }
        }
    }
    if current.len() > 1 {
        polylines.push(current);
    }
    polylines
}

/// Evaluate a quadratic Bézier: B(t) = (1-t)²·p0 + 2t(1-t)·c + t²·p1
fn quad_point(p0: Point, control: Point, p1: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let c0 = u * u;
    let c1 = 2.0 * t * u;
    let c2 = t * t;
    Point::new(
        c0 * p0.x + c1 * control.x + c2 * p1.x,
        c0 * p0.y + c1 * control.y + c2 * p1.y,
    )
}

fn stroke_segment(canvas: &mut Canvas<'_>, a: Point, b: Point, style: StrokeStyle) {
    let half = style.width / 2.0;
    let pad = half + 1.0;

    let x0 = (a.x.min(b.x) - pad).floor() as i32;
    let x1 = (a.x.max(b.x) + pad).ceil() as i32;
    let y0 = (a.y.min(b.y) - pad).floor() as i32;
    let y1 = (a.y.max(b.y) + pad).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            let dist = distance_to_segment(p, a, b);
            let coverage = (half - dist + 0.5).clamp(0.0, 1.0);
            canvas.blend_pixel(x, y, style.color, coverage);
        }
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let apx = p.x - a.x;
    let apy = p.y - a.y;

    let len_sq = abx * abx + aby * aby;
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    };

    let dx = apx - t * abx;
    let dy = apy - t * aby;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PaintContext;
    use crate::path::PathBuilder;
    use crate::surface::Surface;

    fn render(commands: &[PaintCommand], width: u32, height: u32) -> crate::surface::Frame {
        let mut surface = Surface::new(width, height).unwrap();
        let mut canvas = surface.lock();
        execute(commands, &mut canvas);
        drop(canvas);
        surface.post();
        surface.frame()
    }

    #[test]
    fn test_clear_fills_everything() {
        let mut ctx = PaintContext::new();
        ctx.clear(Color::WHITE);
        let frame = render(ctx.commands(), 8, 8);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(frame.get_pixel(x, y), Some([255, 255, 255, 255]));
            }
        }
    }

    #[test]
    fn test_circle_covers_center_not_corners() {
        let mut ctx = PaintContext::new();
        ctx.clear(Color::WHITE);
        ctx.fill_circle(16.0, 16.0, 8.0, Color::RED);
        let frame = render(ctx.commands(), 32, 32);

        assert_eq!(frame.get_pixel(16, 16), Some([255, 0, 0, 255]));
        // Inside, near the edge but solidly covered
        assert_eq!(frame.get_pixel(16, 10), Some([255, 0, 0, 255]));
        // Far outside stays the clear color
        assert_eq!(frame.get_pixel(2, 2), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_circle_edge_is_antialiased() {
        let mut ctx = PaintContext::new();
        ctx.clear(Color::WHITE);
        ctx.fill_circle(16.0, 16.0, 8.0, Color::BLACK);
        let frame = render(ctx.commands(), 32, 32);

        // A pixel straddling the rim at 45° lands inside the feather
        let [r, ..] = frame.get_pixel(21, 21).unwrap();
        assert!(r > 20 && r < 235, "expected partial coverage, got r={r}");
    }

    #[test]
    fn test_horizontal_stroke() {
        let mut ctx = PaintContext::new();
        ctx.clear(Color::WHITE);
        let path = PathBuilder::new().move_to(4.0, 16.0).line_to(28.0, 16.0).build();
        ctx.stroke_path(path, Color::RED, 4.0);
        let frame = render(ctx.commands(), 32, 32);

        assert_eq!(frame.get_pixel(16, 16), Some([255, 0, 0, 255]));
        assert_eq!(frame.get_pixel(16, 4), Some([255, 255, 255, 255]));
        assert_eq!(frame.get_pixel(16, 28), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_quad_stroke_sags_through_control_midpoint() {
        // A symmetric quad from (8,16) to (56,16) with control (32,48) passes
        // through (32, 32): B(0.5) = ¼·p0 + ½·c + ¼·p1
        let mut ctx = PaintContext::new();
        ctx.clear(Color::WHITE);
        let path = PathBuilder::new()
            .move_to(8.0, 16.0)
            .quad_to(32.0, 48.0, 56.0, 16.0)
            .build();
        ctx.stroke_path(path, Color::BLACK, 3.0);
        let frame = render(ctx.commands(), 64, 64);

        let [r, ..] = frame.get_pixel(32, 32).unwrap();
        assert!(r < 64, "curve should pass through the midpoint, got r={r}");
        // The straight chord between the endpoints is untouched
        assert_eq!(frame.get_pixel(32, 16), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_degenerate_shapes_draw_nothing() {
        let mut ctx = PaintContext::new();
        ctx.clear(Color::WHITE);
        ctx.fill_circle(16.0, 16.0, 0.0, Color::RED);
        ctx.stroke_path(
            PathBuilder::new().move_to(4.0, 4.0).line_to(28.0, 4.0).build(),
            Color::RED,
            0.0,
        );
        let frame = render(ctx.commands(), 32, 32);

        let mut reference = PaintContext::new();
        reference.clear(Color::WHITE);
        let blank = render(reference.commands(), 32, 32);
        assert_eq!(frame.diff_pixel_count(&blank), 0);
    }
}
