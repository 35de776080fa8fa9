//! Built-in 8x8 bitmap font, always available.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

use super::{blend, CaptionFont};

const GLYPH: u32 = 8;

#[derive(Debug, Clone, Copy)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    pub const NAME: &'static str = "builtin-8x8";

    /// Each glyph pixel is drawn as a `scale`×`scale` block.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    fn glyph(c: char) -> [u8; 8] {
        BASIC_FONTS
            .get(c)
            .or_else(|| LATIN_FONTS.get(c))
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8])
    }
}

impl CaptionFont for BitmapFont {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * GLYPH * self.scale
    }

    fn draw(&self, canvas: &mut RgbImage, x: i64, y: i64, text: &str, ink: Rgb<u8>) {
        let step = i64::from(GLYPH * self.scale);
        let scale = i64::from(self.scale);
        for (i, c) in text.chars().enumerate() {
            let gx = x + i as i64 * step;
            for (row, bits) in Self::glyph(c).iter().enumerate() {
                for col in 0..GLYPH {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let px = gx + i64::from(col) * scale;
                    let py = y + row as i64 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            blend(canvas, px + dx, py + dy, ink, 1.0);
                        }
                    }
                }
            }
        }
    }
}
