//! Scalable (TrueType/OpenType) caption font via `ab_glyph`.

use ab_glyph::{point, Font, FontVec, GlyphId, InvalidFont, PxScale, ScaleFont};
use image::{Rgb, RgbImage};

use super::{blend, CaptionFont};

pub struct ScalableFont {
    font: FontVec,
    scale: PxScale,
    name: String,
}

impl ScalableFont {
    pub fn from_bytes(bytes: Vec<u8>, size_px: f32, name: String) -> Result<Self, InvalidFont> {
        Ok(Self {
            font: FontVec::try_from_vec(bytes)?,
            scale: PxScale::from(size_px),
            name,
        })
    }

    /// Glyph ids with their caret x positions, kerning applied.
    fn layout(&self, text: &str) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0f32;
        let mut prev: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            glyphs.push((id, caret));
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        (glyphs, caret)
    }
}

impl CaptionFont for ScalableFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn text_width(&self, text: &str) -> u32 {
        self.layout(text).1.ceil().max(0.0) as u32
    }

    fn draw(&self, canvas: &mut RgbImage, x: i64, y: i64, text: &str, ink: Rgb<u8>) {
        let ascent = self.font.as_scaled(self.scale).ascent();
        for (id, caret) in self.layout(text).0 {
            let glyph = id.with_scale_and_position(self.scale, point(caret, ascent));
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = x + bounds.min.x as i64 + i64::from(gx);
                let py = y + bounds.min.y as i64 + i64::from(gy);
                blend(canvas, px, py, ink, coverage);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_font_bytes() {
        assert!(ScalableFont::from_bytes(b"nope".to_vec(), 22.0, "x".into()).is_err());
    }
}
