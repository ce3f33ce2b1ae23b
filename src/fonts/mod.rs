//! Font resolution
//!
//! Checks an ordered list of font files and loads the first one that exists.
//! When none exist the built-in bitmap font is used instead. That font has a
//! single fixed size and ignores the requested one, so text drawn with it no
//! longer scales with the canvas.
//!
//! Nothing is cached: every call checks the filesystem again.

pub mod builtin;
#[cfg(test)]
pub(crate) mod fixture;

use ab_glyph::{Font, FontVec, PxScale};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::FontCandidates;
use crate::error::{Error, Result};

/// Filesystem access used while probing fonts
pub trait FontFs {
    fn exists(&self, path: &Path) -> bool;
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The real filesystem
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemFs;

impl FontFs for SystemFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// A font ready for measuring and drawing text
pub enum FontHandle {
    /// Outline font loaded from disk, scaled to the requested size
    Outline {
        path: PathBuf,
        font: FontVec,
        scale: PxScale,
    },
    /// Fixed-size bitmap fallback
    Builtin,
}

impl FontHandle {
    pub fn is_builtin(&self) -> bool {
        matches!(self, FontHandle::Builtin)
    }
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontHandle::Outline { path, scale, .. } => f
                .debug_struct("Outline")
                .field("path", path)
                .field("scale", &scale.y)
                .finish(),
            FontHandle::Builtin => f.write_str("Builtin"),
        }
    }
}

/// Resolve a font of `size` pixels per em in the requested weight.
pub fn resolve_font(
    fs: &impl FontFs,
    candidates: &FontCandidates,
    size: u32,
    bold: bool,
) -> Result<FontHandle> {
    for path in candidates.for_weight(bold) {
        if !fs.exists(path) {
            continue;
        }
        debug!("Loading font {} at {}px", path.display(), size);
        return load_font(fs, path, size);
    }

    warn!(
        "No {} font found, using built-in {}px bitmap font instead of {}px",
        if bold { "bold" } else { "regular" },
        builtin::LINE_HEIGHT,
        size
    );
    Ok(FontHandle::Builtin)
}

fn load_font(fs: &impl FontFs, path: &Path, size: u32) -> Result<FontHandle> {
    let data = fs.read(path).map_err(|source| Error::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    let font = FontVec::try_from_vec(data).map_err(|source| Error::FontLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let scale = em_scale(&font, size).ok_or_else(|| Error::FontMetrics {
        path: path.to_path_buf(),
    })?;

    Ok(FontHandle::Outline {
        path: path.to_path_buf(),
        font,
        scale,
    })
}

/// Convert an em size to the ascent-to-descent height `ab_glyph` scales by
fn em_scale(font: &impl Font, size: u32) -> Option<PxScale> {
    let units_per_em = font.units_per_em()?;
    Some(PxScale::from(
        size as f32 * font.height_unscaled() / units_per_em,
    ))
}
