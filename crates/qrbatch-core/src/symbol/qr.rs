//! QR Code encoder backed by the `qrcode` crate.

use image::{GrayImage, Luma};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

use super::{EcTier, EncodeError, SymbolEncoder, SymbolImage};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

impl From<EcTier> for EcLevel {
    fn from(tier: EcTier) -> Self {
        match tier {
            EcTier::Low => EcLevel::L,
            EcTier::Medium => EcLevel::M,
            EcTier::Quartile => EcLevel::Q,
            EcTier::High => EcLevel::H,
        }
    }
}

/// Picks the smallest QR version that fits and draws each module as a `box_size` square,
/// surrounded by `border` light modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrSymbolEncoder {
    box_size: u32,
    border: u32,
}

impl QrSymbolEncoder {
    pub fn new(box_size: u32, border: u32) -> Self {
        Self {
            box_size: box_size.max(1),
            border,
        }
    }
}

impl Default for QrSymbolEncoder {
    fn default() -> Self {
        Self::new(6, 2)
    }
}

impl SymbolEncoder for QrSymbolEncoder {
    fn encode(&self, text: &str, ec: EcTier) -> Result<SymbolImage, EncodeError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec.into()).map_err(
            |e| match e {
                QrError::DataTooLong => EncodeError::Capacity { bytes: text.len() },
                other => EncodeError::Encoder(other.to_string()),
            },
        )?;

        let modules = code.width() as u32;
        let colors = code.to_colors();
        let side = (modules + 2 * self.border) * self.box_size;
        let mut image = GrayImage::from_pixel(side, side, LIGHT);

        for (i, color) in colors.iter().enumerate() {
            if *color != Color::Dark {
                continue;
            }
            let mx = i as u32 % modules;
            let my = i as u32 / modules;
            let x0 = (mx + self.border) * self.box_size;
            let y0 = (my + self.border) * self.box_size;
            for y in y0..y0 + self.box_size {
                for x in x0..x0 + self.box_size {
                    image.put_pixel(x, y, DARK);
                }
            }
        }

        Ok(SymbolImage::new(image, modules))
    }
}
