//! Text measurement and placement
//!
//! Measurements are ink boxes relative to the point text is drawn from, so a
//! box's `bottom` already includes the gap between that point and the top of
//! the glyphs. Centering on `bottom` (not on the ink height alone) is what
//! keeps a drawn string where the layout expects it.

use ab_glyph::{Font, GlyphId, ScaleFont, point};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use crate::fonts::{FontHandle, builtin};

/// Ink extent of a string, relative to its draw origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Measure the ink `text` covers when drawn from `(0, 0)`
pub fn text_box(font: &FontHandle, text: &str) -> TextBox {
    match font {
        FontHandle::Outline { font, scale, .. } => {
            let scaled = font.as_scaled(*scale);
            let mut ink: Option<TextBox> = None;
            let mut caret = 0.0;
            let mut last: Option<GlyphId> = None;

            // Same walk `draw_text_mut` makes, kerning included
            for c in text.chars() {
                let id = scaled.glyph_id(c);
                let glyph = id.with_scale_and_position(*scale, point(caret, scaled.ascent()));
                caret += scaled.h_advance(id);
                let Some(outlined) = scaled.outline_glyph(glyph) else {
                    continue;
                };
                if let Some(last) = last {
                    caret += scaled.kern(id, last);
                }
                last = Some(id);

                let bb = outlined.px_bounds();
                let glyph_box = TextBox {
                    left: bb.min.x.round() as i32,
                    top: bb.min.y.round() as i32,
                    right: bb.max.x.round() as i32,
                    bottom: bb.max.y.round() as i32,
                };
                ink = Some(match ink {
                    None => glyph_box,
                    Some(b) => TextBox {
                        left: b.left.min(glyph_box.left),
                        top: b.top.min(glyph_box.top),
                        right: b.right.max(glyph_box.right),
                        bottom: b.bottom.max(glyph_box.bottom),
                    },
                });
            }
            ink.unwrap_or_default()
        }
        FontHandle::Builtin => {
            let (w, h) = builtin::text_size(text);
            TextBox {
                left: 0,
                top: 0,
                right: w as i32,
                bottom: h as i32,
            }
        }
    }
}

/// Draw `text` from `(x, y)`, the top-left of its line box
pub fn draw_text(
    canvas: &mut RgbImage,
    font: &FontHandle,
    color: Rgb<u8>,
    x: i32,
    y: i32,
    text: &str,
) {
    match font {
        FontHandle::Outline { font, scale, .. } => {
            draw_text_mut(canvas, color, x, y, *scale, font, text)
        }
        FontHandle::Builtin => builtin::draw_text(canvas, color, x, y, text),
    }
}

/// Left edge that centers `extent` pixels inside `span` pixels
pub fn centered_x(span: u32, extent: i32) -> i32 {
    (span as i32 - extent).div_euclid(2)
}

/// A measured string placed on a canvas
#[derive(Debug)]
pub struct TextRun<'a> {
    text: &'a str,
    font: &'a FontHandle,
    color: Rgb<u8>,
    x: i32,
    y: i32,
    ink: TextBox,
}

impl<'a> TextRun<'a> {
    /// Place text at an explicit origin
    pub fn at(text: &'a str, font: &'a FontHandle, color: Rgb<u8>, x: i32, y: i32) -> Self {
        Self {
            text,
            font,
            color,
            x,
            y,
            ink: text_box(font, text),
        }
    }

    /// Center the ink width across `span` pixels at row `y`
    pub fn centered(
        text: &'a str,
        font: &'a FontHandle,
        color: Rgb<u8>,
        span: u32,
        y: i32,
    ) -> Self {
        let mut run = Self::at(text, font, color, 0, y);
        run.x = centered_x(span, run.ink.width());
        run
    }

    /// Center the origin-relative box in a `span` square, then shift up by `lift`
    pub fn centered_in(mut self, span: u32, lift: i32) -> Self {
        self.x = centered_x(span, self.ink.right);
        self.y = (span as i32 - self.ink.bottom).div_euclid(2) - lift;
        self
    }

    /// Center the origin-relative box on `(cx, cy)`, then shift up by `lift`
    pub fn centered_on(mut self, cx: i32, cy: i32, lift: i32) -> Self {
        self.x = cx - self.ink.right / 2;
        self.y = cy - self.ink.bottom / 2 - lift;
        self
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn ink(&self) -> TextBox {
        self.ink
    }

    pub fn draw(&self, canvas: &mut RgbImage) {
        draw_text(canvas, self.font, self.color, self.x, self.y, self.text);
    }
}
