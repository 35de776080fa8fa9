//! Caption font capability lookup.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

use super::{BitmapFont, ScalableFont};
use crate::config::RenderConfig;

/// Directories searched for font paths given as bare file names.
pub const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/msttcorefonts",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
    "C:\\Windows\\Fonts",
];

/// Something that can measure and draw a single line of caption text.
pub trait CaptionFont: Send + Sync {
    fn name(&self) -> &str;

    /// Advance width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Draw `text` with its top-left corner at (`x`, `y`); pixels off the canvas are dropped.
    fn draw(&self, canvas: &mut RgbImage, x: i64, y: i64, text: &str, ink: Rgb<u8>);
}

fn candidates(path: &Path) -> Vec<PathBuf> {
    if path.is_absolute() || path.exists() {
        return vec![path.to_path_buf()];
    }
    FONT_DIRS.iter().map(|dir| Path::new(dir).join(path)).collect()
}

/// First configured scalable font that loads, else the built-in bitmap font. Never fails.
pub fn resolve_font(render: &RenderConfig) -> Box<dyn CaptionFont> {
    for configured in &render.font_paths {
        for path in candidates(configured) {
            let Ok(bytes) = std::fs::read(&path) else {
                continue;
            };
            match ScalableFont::from_bytes(bytes, render.font_size, path.display().to_string()) {
                Ok(font) => {
                    tracing::debug!("caption font: {}", path.display());
                    return Box::new(font);
                }
                Err(e) => tracing::debug!("skipping font {}: {}", path.display(), e),
            }
        }
    }
    tracing::debug!("no scalable caption font found; using built-in bitmap font");
    Box::new(BitmapFont::new(render.bitmap_scale))
}
