//! Asset generation
//!
//! One generator drives every asset:
//! - Square profile logo (1024px and 512px)
//! - Wide cover banner (1640x624)
//!
//! Each step builds a canvas, writes it as PNG and moves on. The first
//! failure stops the run.

pub mod cover;
pub mod profile;

use image::{ImageFormat, RgbImage};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::BrandConfig;
use crate::constants::*;
use crate::error::{Error, Result};
use crate::fonts::{FontFs, FontHandle, SystemFs, resolve_font};

/// What to draw for one output file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    Profile { size: u32 },
    Cover { width: u32, height: u32 },
}

/// One build-and-write step
#[derive(Clone, Copy, Debug)]
pub struct AssetStep {
    pub file_name: &'static str,
    pub asset: Asset,
}

/// Every asset, in the order they are written
pub const ASSET_STEPS: [AssetStep; 3] = [
    AssetStep {
        file_name: PROFILE_LARGE_FILE,
        asset: Asset::Profile {
            size: PROFILE_LARGE_SIZE,
        },
    },
    AssetStep {
        file_name: PROFILE_SMALL_FILE,
        asset: Asset::Profile {
            size: PROFILE_SMALL_SIZE,
        },
    },
    AssetStep {
        file_name: COVER_FILE,
        asset: Asset::Cover {
            width: COVER_WIDTH,
            height: COVER_HEIGHT,
        },
    },
];

/// Directory the binary writes into: `assets/` beside the generator's sources
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_DIR)
}

/// Draws brand assets from a config, resolving fonts through `F`
pub struct AssetGenerator<F: FontFs = SystemFs> {
    config: BrandConfig,
    fonts: F,
}

impl AssetGenerator<SystemFs> {
    /// Generator using the embedded brand config and system fonts
    pub fn with_system_fonts() -> Result<Self> {
        Ok(Self::new(BrandConfig::builtin()?, SystemFs))
    }
}

impl<F: FontFs> AssetGenerator<F> {
    pub fn new(config: BrandConfig, fonts: F) -> Self {
        Self { config, fonts }
    }

    pub fn config(&self) -> &BrandConfig {
        &self.config
    }

    /// Resolve a font for one drawing call. Never cached.
    pub fn font(&self, size: u32, bold: bool) -> Result<FontHandle> {
        resolve_font(&self.fonts, &self.config.fonts, size.max(1), bold)
    }

    pub fn build(&self, asset: Asset) -> Result<RgbImage> {
        match asset {
            Asset::Profile { size } => self.profile_logo(size),
            Asset::Cover { width, height } => self.cover_image(width, height),
        }
    }

    /// Build and write every asset into `out_dir`, returning the written paths
    pub fn run(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(out_dir).map_err(|source| Error::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(ASSET_STEPS.len());
        for step in &ASSET_STEPS {
            let canvas = self.build(step.asset)?;
            let path = out_dir.join(step.file_name);
            canvas
                .save_with_format(&path, ImageFormat::Png)
                .map_err(|source| Error::Write {
                    path: path.clone(),
                    source,
                })?;
            info!(
                "Created: {} ({}x{})",
                path.display(),
                canvas.width(),
                canvas.height()
            );
            written.push(path);
        }
        Ok(written)
    }
}

/// Print the operator summary: a header and one line per written file
pub fn write_report(out: &mut impl Write, paths: &[PathBuf]) -> io::Result<()> {
    writeln!(out, "Wrote:")?;
    for path in paths {
        writeln!(out, " - {}", path.display())?;
    }
    Ok(())
}
