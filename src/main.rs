//! ARL brand asset generator
//!
//! Writes the profile logos and the cover banner into `assets/`.
//!
//! Run with: `cargo run`

use anyhow::Context;
use arl_brand::{AssetGenerator, default_output_dir, write_report};
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let generator =
        AssetGenerator::with_system_fonts().context("Failed to load embedded brand config")?;
    let out_dir = default_output_dir();
    let written = generator
        .run(&out_dir)
        .with_context(|| format!("Failed to generate assets in {}", out_dir.display()))?;

    write_report(&mut io::stdout().lock(), &written)?;
    Ok(())
}
