//! Offline gradient artwork for every category.
//!
//! Each placeholder is a 400x400 JPEG with a diagonal two-colour gradient,
//! written under the same `<slug>.jpg` name a download would use, so it can
//! stand in for images that could not be fetched.

use std::io;
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use tracing::debug;

use crate::utils::files::{destination_path, ensure_directory};

pub const PLACEHOLDER_SIZE: u32 = 400;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub slug: &'static str,
    pub from: [u8; 3],
    pub to: [u8; 3],
}

const fn palette(slug: &'static str, from: u32, to: u32) -> Palette {
    Palette {
        slug,
        from: [(from >> 16) as u8, (from >> 8) as u8, from as u8],
        to: [(to >> 16) as u8, (to >> 8) as u8, to as u8],
    }
}

pub const PALETTES: [Palette; 12] = [
    palette("transport", 0xf97316, 0xef4444),
    palette("real-estate", 0x3b82f6, 0x2563eb),
    palette("jobs", 0xef4444, 0xdc2626),
    palette("services", 0xa855f7, 0x9333ea),
    palette("electronics", 0x22c55e, 0x16a34a),
    palette("home", 0xfacc15, 0xea580c),
    palette("clothing", 0x60a5fa, 0x3b82f6),
    palette("parts", 0x9ca3af, 0x4b5563),
    palette("hobby", 0xf472b6, 0xe11d48),
    palette("pets", 0xfde047, 0xeab308),
    palette("beauty", 0xf9a8d4, 0xdb2777),
    palette("kids", 0x67e8f9, 0x06b6d4),
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlaceholderReport {
    pub written: usize,
    pub skipped_existing: usize,
}

/// Render a top-left to bottom-right gradient.
pub fn render_placeholder(palette: &Palette, size: u32) -> RgbImage {
    let span = (2 * size.saturating_sub(1)).max(1) as f32;

    ImageBuffer::from_fn(size, size, |x, y| {
        let t = (x + y) as f32 / span;
        let channel = |i: usize| {
            let from = palette.from[i] as f32;
            let to = palette.to[i] as f32;
            (from + (to - from) * t).round() as u8
        };
        Rgb([channel(0), channel(1), channel(2)])
    })
}

/// Write a placeholder JPEG for every category into `dir`.
pub fn write_placeholders(dir: &Path, missing_only: bool) -> io::Result<PlaceholderReport> {
    ensure_directory(dir).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let mut report = PlaceholderReport::default();

    for palette in &PALETTES {
        let path = destination_path(dir, palette.slug);

        if missing_only && path.exists() {
            debug!(category = palette.slug, "keeping existing image");
            report.skipped_existing += 1;
            continue;
        }

        render_placeholder(palette, PLACEHOLDER_SIZE)
            .save_with_format(&path, image::ImageFormat::Jpeg)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        println!("Generated {}", path.display());
        report.written += 1;
    }

    Ok(report)
}
