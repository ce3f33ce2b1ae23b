//! Wide cover banner
//!
//! Laid out in literal pixels for 1640x624. The builder takes a width and
//! height, but only the canvas, stripes, panel and badge row follow them; the
//! copy block stays at fixed offsets, so other sizes will misalign.

use image::RgbImage;

use super::AssetGenerator;
use crate::constants::*;
use crate::draw::{
    Bounds, DiagonalStripes, Ellipse, RoundedRect, Stroke, TextRun, draw_diagonal_stripes,
    draw_ellipse, draw_filled_bar, draw_rounded_rect, new_canvas,
};
use crate::error::Result;
use crate::fonts::FontFs;

impl<F: FontFs> AssetGenerator<F> {
    pub fn cover_image(&self, width: u32, height: u32) -> Result<RgbImage> {
        let palette = &self.config().palette;
        let copy = &self.config().cover;
        let mut canvas = new_canvas(width, height, palette.background.rgb());

        draw_diagonal_stripes(
            &mut canvas,
            &DiagonalStripes {
                step: STRIPE_STEP,
                width: STRIPE_WIDTH,
                even: palette.card.rgb(),
                odd: palette.stripe_dark.rgb(),
            },
        );

        // Panel
        draw_rounded_rect(
            &mut canvas,
            &RoundedRect {
                bounds: Bounds::inset(width, height, PANEL_PAD_X, PANEL_PAD_Y),
                radius: PANEL_RADIUS,
                fill: Some(palette.panel.rgb()),
                stroke: Some(Stroke::solid(
                    palette.panel_outline.rgb(),
                    PANEL_OUTLINE_WIDTH,
                )),
            },
        );

        // Badge with monogram
        let cx = PANEL_PAD_X + BADGE_OFFSET_X;
        let cy = height as i32 / 2;
        draw_ellipse(
            &mut canvas,
            &Ellipse {
                bounds: Bounds::around(cx, cy, BADGE_RADIUS),
                fill: Some(palette.card.rgb()),
                stroke: Some(Stroke::solid(palette.accent.rgb(), BADGE_OUTLINE_WIDTH)),
            },
        );
        let mono = self.font(BADGE_MONOGRAM_SIZE, true)?;
        TextRun::at(&copy.monogram, &mono, palette.text.rgb(), 0, 0)
            .centered_on(cx, cy, BADGE_MONOGRAM_LIFT)
            .draw(&mut canvas);

        let x0 = PANEL_PAD_X + COPY_OFFSET_X;

        let h1 = self.font(HEADLINE_SIZE, true)?;
        TextRun::at(
            &copy.headline,
            &h1,
            palette.text.rgb(),
            x0,
            PANEL_PAD_Y + HEADLINE_Y,
        )
        .draw(&mut canvas);

        let h2 = self.font(SUBHEADLINE_SIZE, false)?;
        TextRun::at(
            &copy.subheadline,
            &h2,
            palette.muted.rgb(),
            x0,
            PANEL_PAD_Y + SUBHEADLINE_Y,
        )
        .draw(&mut canvas);

        let body = self.font(BULLET_SIZE, false)?;
        let mut y = PANEL_PAD_Y + BULLET_Y;
        for bullet in &copy.bullets {
            let line = format!("{}{}", copy.bullet_prefix, bullet);
            TextRun::at(&line, &body, palette.bullet.rgb(), x0, y).draw(&mut canvas);
            y += BULLET_LINE_HEIGHT;
        }

        // Accent rule above the headline
        let bar_y = PANEL_PAD_Y + ACCENT_BAR_Y;
        draw_filled_bar(
            &mut canvas,
            &Bounds::new(x0, bar_y, x0 + ACCENT_BAR_WIDTH, bar_y + ACCENT_BAR_HEIGHT),
            palette.accent2.rgb(),
        );

        Ok(canvas)
    }
}
