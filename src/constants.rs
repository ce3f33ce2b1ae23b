//! Layout constants for the brand assets
//!
//! Profile logo values are fractions of the square edge so every size shares
//! one layout. Cover values are literal pixels for the 1640x624 banner.

// =============================================================================
// OUTPUT
// =============================================================================

pub const PROFILE_LARGE_SIZE: u32 = 1024;
pub const PROFILE_SMALL_SIZE: u32 = 512;
pub const COVER_WIDTH: u32 = 1640;
pub const COVER_HEIGHT: u32 = 624;

pub const PROFILE_LARGE_FILE: &str = "arl_profile_1024.png";
pub const PROFILE_SMALL_FILE: &str = "arl_profile_512.png";
pub const COVER_FILE: &str = "arl_cover_1640x624.png";

/// Output directory name, relative to the crate root
pub const OUTPUT_DIR: &str = "assets";

// =============================================================================
// PROFILE LOGO (fractions of edge length)
// =============================================================================

pub const PROFILE_PADDING: f32 = 0.10;
pub const PROFILE_CORNER_RADIUS: f32 = 0.12;
pub const PROFILE_CARD_OUTLINE_WIDTH: u32 = 2;
pub const PROFILE_RING_INSET: f32 = 0.16;
pub const PROFILE_RING_WIDTH: f32 = 0.02;
pub const PROFILE_MONOGRAM_SIZE: f32 = 0.22;
pub const PROFILE_MONOGRAM_LIFT: f32 = 0.03; // Nudge above true center
pub const PROFILE_SUBTITLE_SIZE: f32 = 0.05;
pub const PROFILE_SUBTITLE_Y: f32 = 0.66;
pub const PROFILE_MOTTO_SIZE: f32 = 0.036;
pub const PROFILE_MOTTO_Y: f32 = 0.73;

// =============================================================================
// COVER IMAGE (pixels)
// =============================================================================

pub const STRIPE_STEP: u32 = 12;
pub const STRIPE_WIDTH: f32 = 10.0;

pub const PANEL_PAD_X: i32 = 80;
pub const PANEL_PAD_Y: i32 = 70;
pub const PANEL_RADIUS: f32 = 26.0;
pub const PANEL_OUTLINE_WIDTH: u32 = 2;

pub const BADGE_OFFSET_X: i32 = 160; // From left panel padding
pub const BADGE_RADIUS: i32 = 110;
pub const BADGE_OUTLINE_WIDTH: u32 = 6;
pub const BADGE_MONOGRAM_SIZE: u32 = 64;
pub const BADGE_MONOGRAM_LIFT: i32 = 6;

pub const COPY_OFFSET_X: i32 = 320; // From left panel padding
pub const HEADLINE_SIZE: u32 = 56;
pub const HEADLINE_Y: i32 = 120; // From top panel padding
pub const SUBHEADLINE_SIZE: u32 = 24;
pub const SUBHEADLINE_Y: i32 = 190;
pub const BULLET_SIZE: u32 = 22;
pub const BULLET_Y: i32 = 250;
pub const BULLET_LINE_HEIGHT: i32 = 34;

pub const ACCENT_BAR_Y: i32 = 95; // From top panel padding
pub const ACCENT_BAR_WIDTH: i32 = 140;
pub const ACCENT_BAR_HEIGHT: i32 = 6;

/// Scale a profile proportion to whole pixels, truncating
pub fn proportion(size: u32, fraction: f32) -> u32 {
    (size as f32 * fraction) as u32
}
