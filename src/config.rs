//! Brand configuration - palette, copy text and font candidates
//!
//! The brand file is compiled into the binary from `config/brand.toml`, so
//! every run draws with the same data and there is nothing to configure at
//! runtime.

use image::Rgb;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;

/// Brand file embedded at build time
pub const BRAND_TOML: &str = include_str!("../config/brand.toml");

/// An sRGB color stored as a `[r, g, b]` triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub fn rgb(self) -> Rgb<u8> {
        Rgb(self.0)
    }
}

/// Named brand colors
#[derive(Clone, Debug, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent2: Color,
    /// Dim gray used for the profile motto
    pub motto: Color,
    /// Cover bullet lines
    pub bullet: Color,
    /// Cover panel fill and outline
    pub panel: Color,
    pub panel_outline: Color,
    /// Odd diagonal stripes on the cover; even stripes use `card`
    pub stripe_dark: Color,
    /// Profile card outline, drawn opaque
    pub card_outline: Color,
}

/// Text drawn on the square profile logo
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileCopy {
    pub monogram: String,
    pub subtitle: String,
    pub motto: String,
}

/// Text drawn on the cover banner
#[derive(Clone, Debug, Deserialize)]
pub struct CoverCopy {
    pub monogram: String,
    pub headline: String,
    pub subheadline: String,
    pub bullet_prefix: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Ordered font file candidates per weight
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FontCandidates {
    #[serde(default)]
    pub bold: Vec<PathBuf>,
    #[serde(default)]
    pub regular: Vec<PathBuf>,
}

impl FontCandidates {
    /// Candidates for the requested weight, in lookup order
    pub fn for_weight(&self, bold: bool) -> &[PathBuf] {
        if bold { &self.bold } else { &self.regular }
    }
}

/// Complete brand description passed to the builders
#[derive(Clone, Debug, Deserialize)]
pub struct BrandConfig {
    pub palette: Palette,
    pub profile: ProfileCopy,
    pub cover: CoverCopy,
    #[serde(default)]
    pub fonts: FontCandidates,
}

impl BrandConfig {
    /// Parse the embedded brand file
    pub fn builtin() -> Result<Self> {
        Self::parse(BRAND_TOML)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
