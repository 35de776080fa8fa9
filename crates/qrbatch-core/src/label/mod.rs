//! Label compositing: symbol above a centered caption band, flattened to RGB.

mod bitmap;
mod font;
mod scalable;

use image::{imageops, DynamicImage, Rgb, RgbImage};

pub use bitmap::BitmapFont;
pub use font::{resolve_font, CaptionFont, FONT_DIRS};
pub use scalable::ScalableFont;

use crate::symbol::SymbolImage;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Final per-row raster: symbol on top, caption band below. No alpha channel.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledImage {
    image: RgbImage,
}

impl LabeledImage {
    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

/// Stacks a symbol above a caption band of fixed height.
pub struct LabelCompositor {
    font: Box<dyn CaptionFont>,
    caption_height: u32,
    caption_offset: u32,
}

impl LabelCompositor {
    pub fn new(font: Box<dyn CaptionFont>, caption_height: u32, caption_offset: u32) -> Self {
        Self {
            font,
            caption_height,
            caption_offset,
        }
    }

    pub fn font_name(&self) -> &str {
        self.font.name()
    }

    pub fn compose(&self, symbol: &SymbolImage, caption: &str) -> LabeledImage {
        let width = symbol.width();
        let height = symbol.height() + self.caption_height;
        let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

        let top = DynamicImage::ImageLuma8(symbol.image().clone()).into_rgb8();
        imageops::replace(&mut canvas, &top, 0, 0);

        // Captions wider than the symbol start left of the canvas and are clipped.
        let text_width = i64::from(self.font.text_width(caption));
        let x = (i64::from(width) - text_width).div_euclid(2);
        let y = i64::from(symbol.height() + self.caption_offset);
        self.font.draw(&mut canvas, x, y, caption, INK);

        LabeledImage { image: canvas }
    }
}

/// Blend `ink` over the pixel at (`x`, `y`) with `coverage` in 0..=1; off-canvas is ignored.
pub(crate) fn blend(canvas: &mut RgbImage, x: i64, y: i64, ink: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= i64::from(canvas.width()) || y >= i64::from(canvas.height()) {
        return;
    }
    let c = coverage.clamp(0.0, 1.0);
    let px = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in px.0.iter_mut().zip(ink.0) {
        *dst = (f32::from(*dst) * (1.0 - c) + f32::from(src) * c).round() as u8;
    }
}
