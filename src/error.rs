//! Error types for asset generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop asset generation.
///
/// A missing font is not an error: the resolver falls back to the built-in
/// bitmap font instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Embedded brand config did not parse
    #[error("Invalid brand config: {0}")]
    Config(#[from] toml::de::Error),

    /// A font candidate exists but could not be read
    #[error("Failed to read font {}: {source}", .path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A font candidate exists but is not a usable font
    #[error("Invalid font file {}: {source}", .path.display())]
    FontLoad {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },

    /// Font parsed but reports no units-per-em, so sizes cannot be mapped
    #[error("Font {} has no units-per-em", .path.display())]
    FontMetrics { path: PathBuf },

    /// Output directory could not be created
    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Encoding or writing a PNG failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
