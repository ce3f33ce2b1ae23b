//! End-to-end runs of the generator into temporary directories

use arl_brand::{AssetGenerator, BrandConfig, Error, FontFs, resolve_font, write_report};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
#[path = "../src/fonts/fixture.rs"]
mod fixture;

/// A machine with no fonts installed
struct NoFonts;

impl FontFs for NoFonts {
    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn read(&self, _path: &Path) -> io::Result<Vec<u8>> {
        Err(io::Error::from(io::ErrorKind::NotFound))
    }
}

/// Every candidate path holds the box test font
struct BoxFonts;

impl FontFs for BoxFonts {
    fn exists(&self, _path: &Path) -> bool {
        true
    }

    fn read(&self, _path: &Path) -> io::Result<Vec<u8>> {
        Ok(fixture::box_font())
    }
}

fn generator() -> AssetGenerator<NoFonts> {
    AssetGenerator::new(BrandConfig::builtin().unwrap(), NoFonts)
}

#[test]
fn test_run_writes_three_pngs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("assets");
    let written = generator().run(&out).unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "arl_profile_1024.png",
            "arl_profile_512.png",
            "arl_cover_1640x624.png"
        ]
    );

    let expected = [(1024, 1024), (512, 512), (1640, 624)];
    for (path, dims) in written.iter().zip(expected) {
        assert!(path.starts_with(&out));
        let format = image::ImageFormat::from_path(path).unwrap();
        assert_eq!(format, image::ImageFormat::Png);
        let img = image::open(path).unwrap();
        assert_eq!((img.width(), img.height()), dims);
    }
}

#[test]
fn test_run_is_byte_for_byte_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let first = generator().run(&dir.path().join("one")).unwrap();
    let second = generator().run(&dir.path().join("two")).unwrap();
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }
}

#[test]
fn test_existing_output_dir_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    generator().run(dir.path()).unwrap();
    generator().run(dir.path()).unwrap();
}

#[test]
fn test_unwritable_output_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let err = generator().run(&blocker.join("assets")).unwrap_err();
    assert!(matches!(err, Error::OutputDir { .. }));
}

#[test]
fn test_report_has_four_lines() {
    let dir = tempfile::tempdir().unwrap();
    let written = generator().run(dir.path()).unwrap();
    let mut out = Vec::new();
    write_report(&mut out, &written).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Wrote:");
    for (line, path) in lines[1..].iter().zip(&written) {
        assert_eq!(*line, format!(" - {}", path.display()));
    }
}

#[test]
fn test_outline_fonts_render_every_asset() {
    let config = BrandConfig::builtin().unwrap();
    let first_bold = config.fonts.bold[0].clone();
    let font = resolve_font(&BoxFonts, &config.fonts, 64, true).unwrap();
    assert!(!font.is_builtin());
    assert!(format!("{font:?}").contains(&*first_bold.to_string_lossy()));

    let dir = tempfile::tempdir().unwrap();
    let with_outline = AssetGenerator::new(config, BoxFonts)
        .run(&dir.path().join("outline"))
        .unwrap();
    let with_builtin = generator().run(&dir.path().join("builtin")).unwrap();

    let expected = [(1024, 1024), (512, 512), (1640, 624)];
    for ((outline, builtin), dims) in with_outline.iter().zip(&with_builtin).zip(expected) {
        let img = image::open(outline).unwrap();
        assert_eq!((img.width(), img.height()), dims);
        // Text drawn with the outline font, not the bitmap fallback
        assert_ne!(fs::read(outline).unwrap(), fs::read(builtin).unwrap());
    }
}

#[test]
fn test_written_paths_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let written: Vec<PathBuf> = generator().run(dir.path()).unwrap();
    for path in written {
        assert!(path.is_file());
    }
}
