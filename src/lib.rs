//! ARL brand assets - profile logos and cover banner drawn from code
//!
//! This crate provides the brand config, font resolution, drawing primitives
//! and the generator that writes the PNG files.

pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod fonts;
pub mod generate;

// Re-export commonly used types for convenience
pub use config::{BrandConfig, Color, CoverCopy, FontCandidates, Palette, ProfileCopy};
pub use constants::*;
pub use error::{Error, Result};
pub use fonts::{FontFs, FontHandle, SystemFs, resolve_font};
pub use generate::{
    ASSET_STEPS, Asset, AssetGenerator, AssetStep, default_output_dir, write_report,
};
