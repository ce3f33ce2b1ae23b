//! Shape primitives
//!
//! Rounded rectangles and ellipses are rasterized per pixel from a signed
//! distance, with a one pixel coverage ramp on the edges. Strokes are drawn
//! inward from the shape edge. Lines are hard-edged.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use super::{Bounds, blend_pixel};

/// Outline drawn inside a shape's edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb<u8>,
    pub width: u32,
}

impl Stroke {
    pub fn solid(color: Rgb<u8>, width: u32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RoundedRect {
    pub bounds: Bounds,
    pub radius: f32,
    pub fill: Option<Rgb<u8>>,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, Copy, Debug)]
pub struct Ellipse {
    pub bounds: Bounds,
    pub fill: Option<Rgb<u8>>,
    pub stroke: Option<Stroke>,
}

/// Straight segment with square (butt) ends
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub width: f32,
    pub color: Rgb<u8>,
}

/// Parallel lines from `(i, 0)` to `(0, i)` every `step` pixels across the
/// canvas, alternating between two colors
#[derive(Clone, Copy, Debug)]
pub struct DiagonalStripes {
    pub step: u32,
    pub width: f32,
    pub even: Rgb<u8>,
    pub odd: Rgb<u8>,
}

pub fn draw_rounded_rect(canvas: &mut RgbImage, rect: &RoundedRect) {
    let (cx, cy) = rect.bounds.center();
    let half_w = rect.bounds.width() / 2.0;
    let half_h = rect.bounds.height() / 2.0;
    let radius = rect.radius.clamp(0.0, half_w.min(half_h));

    paint_distance_field(canvas, &rect.bounds, rect.fill, rect.stroke, |px, py| {
        let qx = (px - cx).abs() - half_w + radius;
        let qy = (py - cy).abs() - half_h + radius;
        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let inside = qx.max(qy).min(0.0);
        outside + inside - radius
    });
}

pub fn draw_ellipse(canvas: &mut RgbImage, ellipse: &Ellipse) {
    let (cx, cy) = ellipse.bounds.center();
    let rx = ellipse.bounds.width() / 2.0;
    let ry = ellipse.bounds.height() / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let min_r = rx.min(ry);

    paint_distance_field(canvas, &ellipse.bounds, ellipse.fill, ellipse.stroke, |px, py| {
        let nx = (px - cx) / rx;
        let ny = (py - cy) / ry;
        // Exact for circles, close enough for mild ellipses
        ((nx * nx + ny * ny).sqrt() - 1.0) * min_r
    });
}

/// Fill and stroke every pixel in `bounds` from a signed distance (negative inside)
fn paint_distance_field(
    canvas: &mut RgbImage,
    bounds: &Bounds,
    fill: Option<Rgb<u8>>,
    stroke: Option<Stroke>,
    distance: impl Fn(f32, f32) -> f32,
) {
    let Some((x0, y0, x1, y1)) = bounds.clipped(canvas) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = distance(x as f32 + 0.5, y as f32 + 0.5);
            let inside = (0.5 - d).clamp(0.0, 1.0);
            if inside <= 0.0 {
                continue;
            }
            if let Some(color) = fill {
                blend_pixel(canvas, x, y, color, inside);
            }
            if let Some(stroke) = stroke {
                let band = (d + stroke.width as f32 + 0.5).clamp(0.0, 1.0);
                blend_pixel(canvas, x, y, stroke.color, inside * band);
            }
        }
    }
}

/// Values of `u` where `lo <= a * u + b <= hi`
fn linear_span(a: f32, b: f32, lo: f32, hi: f32) -> Option<(f32, f32)> {
    if a == 0.0 {
        return (lo <= b && b <= hi).then_some((f32::NEG_INFINITY, f32::INFINITY));
    }
    let u0 = (lo - b) / a;
    let u1 = (hi - b) / a;
    Some((u0.min(u1), u0.max(u1)))
}

pub fn draw_line(canvas: &mut RgbImage, line: &Line) {
    let (x0, y0) = line.from;
    let (x1, y1) = line.to;
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return;
    }
    let len = len_sq.sqrt();
    let half = line.width / 2.0;
    let max_x = canvas.width() as f32 - 1.0;
    let max_y = canvas.height() as f32 - 1.0;

    let row_start = (y0.min(y1) - half).floor().max(0.0) as i32;
    let row_end = (y0.max(y1) + half).ceil().min(max_y) as i32;

    for y in row_start..=row_end {
        let fy = y as f32 - y0;
        // Perpendicular offset within half width, projection within the segment
        let Some((p0, p1)) = linear_span(dy, -fy * dx, -half * len, half * len) else {
            continue;
        };
        let Some((a0, a1)) = linear_span(dx, fy * dy, 0.0, len_sq) else {
            continue;
        };
        let start = (p0.max(a0) + x0).ceil().max(0.0);
        let end = (p1.min(a1) + x0).floor().min(max_x);
        if start > end {
            continue;
        }
        for x in start as i32..=end as i32 {
            canvas.put_pixel(x as u32, y as u32, line.color);
        }
    }
}

pub fn draw_diagonal_stripes(canvas: &mut RgbImage, stripes: &DiagonalStripes) {
    let span = canvas.width() + canvas.height();
    for (n, i) in (0..span).step_by(stripes.step.max(1) as usize).enumerate() {
        let color = if n % 2 == 0 { stripes.even } else { stripes.odd };
        draw_line(
            canvas,
            &Line {
                from: (i as f32, 0.0),
                to: (0.0, i as f32),
                width: stripes.width,
                color,
            },
        );
    }
}

/// Solid axis-aligned rectangle over inclusive bounds
pub fn draw_filled_bar(canvas: &mut RgbImage, bounds: &Bounds, color: Rgb<u8>) {
    let rect = Rect::at(bounds.x0, bounds.y0).of_size(
        (bounds.x1 - bounds.x0 + 1).max(1) as u32,
        (bounds.y1 - bounds.y0 + 1).max(1) as u32,
    );
    draw_filled_rect_mut(canvas, rect, color);
}
