//! Canvas helpers, shape primitives and text runs

pub mod shapes;
pub mod text;

use image::{Rgb, RgbImage};

pub use shapes::{
    DiagonalStripes, Ellipse, Line, RoundedRect, Stroke, draw_diagonal_stripes, draw_ellipse,
    draw_filled_bar, draw_line, draw_rounded_rect,
};
pub use text::{TextBox, TextRun, centered_x, draw_text, text_box};

/// Inclusive pixel bounds, `x1`/`y1` are the last covered column and row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Bounds inset by `inset` pixels on every side of a `width`x`height` area
    pub fn inset(width: u32, height: u32, inset_x: i32, inset_y: i32) -> Self {
        Self::new(
            inset_x,
            inset_y,
            width as i32 - inset_x,
            height as i32 - inset_y,
        )
    }

    /// Square bounds around a center point
    pub fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    pub fn width(&self) -> f32 {
        (self.x1 - self.x0 + 1) as f32
    }

    pub fn height(&self) -> f32 {
        (self.y1 - self.y0 + 1) as f32
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.x0 as f32 + self.width() / 2.0,
            self.y0 as f32 + self.height() / 2.0,
        )
    }

    /// Row and column ranges that fall inside the canvas
    fn clipped(&self, canvas: &RgbImage) -> Option<(i32, i32, i32, i32)> {
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(canvas.width() as i32 - 1);
        let y1 = self.y1.min(canvas.height() as i32 - 1);
        if x0 > x1 || y0 > y1 {
            None
        } else {
            Some((x0, y0, x1, y1))
        }
    }
}

/// Allocate a canvas filled with `background`
pub fn new_canvas(width: u32, height: u32, background: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, background)
}

/// Blend `color` over the pixel at `(x, y)` with the given coverage (0-1).
/// Out-of-canvas coordinates are ignored.
pub fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if coverage <= 0.0
        || x < 0
        || y < 0
        || x >= canvas.width() as i32
        || y >= canvas.height() as i32
    {
        return;
    }
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    if coverage >= 1.0 {
        *pixel = color;
        return;
    }
    let inv = 1.0 - coverage;
    for i in 0..3 {
        pixel[i] = (color[i] as f32 * coverage + pixel[i] as f32 * inv).round() as u8;
    }
}
