//! Square profile logo
//!
//! Every coordinate is a fraction of the edge length, so the same layout
//! serves the 1024px and 512px variants.

use image::RgbImage;

use super::AssetGenerator;
use crate::constants::*;
use crate::draw::{
    Bounds, Ellipse, RoundedRect, Stroke, TextRun, draw_ellipse, draw_rounded_rect, new_canvas,
};
use crate::error::Result;
use crate::fonts::FontFs;

impl<F: FontFs> AssetGenerator<F> {
    pub fn profile_logo(&self, size: u32) -> Result<RgbImage> {
        let palette = &self.config().palette;
        let copy = &self.config().profile;
        let mut canvas = new_canvas(size, size, palette.background.rgb());

        // Card
        let pad = proportion(size, PROFILE_PADDING) as i32;
        draw_rounded_rect(
            &mut canvas,
            &RoundedRect {
                bounds: Bounds::inset(size, size, pad, pad),
                radius: proportion(size, PROFILE_CORNER_RADIUS) as f32,
                fill: Some(palette.card.rgb()),
                stroke: Some(Stroke::solid(
                    palette.card_outline.rgb(),
                    PROFILE_CARD_OUTLINE_WIDTH,
                )),
            },
        );

        // Accent ring
        let ring_pad = proportion(size, PROFILE_RING_INSET) as i32;
        draw_ellipse(
            &mut canvas,
            &Ellipse {
                bounds: Bounds::inset(size, size, ring_pad, ring_pad),
                fill: None,
                stroke: Some(Stroke::solid(
                    palette.accent.rgb(),
                    proportion(size, PROFILE_RING_WIDTH).max(1),
                )),
            },
        );

        // Monogram, centered and lifted slightly
        let big = self.font(proportion(size, PROFILE_MONOGRAM_SIZE), true)?;
        TextRun::at(&copy.monogram, &big, palette.text.rgb(), 0, 0)
            .centered_in(size, proportion(size, PROFILE_MONOGRAM_LIFT) as i32)
            .draw(&mut canvas);

        let small = self.font(proportion(size, PROFILE_SUBTITLE_SIZE), false)?;
        TextRun::centered(
            &copy.subtitle,
            &small,
            palette.muted.rgb(),
            size,
            proportion(size, PROFILE_SUBTITLE_Y) as i32,
        )
        .draw(&mut canvas);

        let tiny = self.font(proportion(size, PROFILE_MOTTO_SIZE), false)?;
        TextRun::centered(
            &copy.motto,
            &tiny,
            palette.motto.rgb(),
            size,
            proportion(size, PROFILE_MOTTO_Y) as i32,
        )
        .draw(&mut canvas);

        Ok(canvas)
    }
}
