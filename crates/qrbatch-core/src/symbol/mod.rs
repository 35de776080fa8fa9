//! Symbol encoding: payload text → scannable 2-D matrix raster.
//!
//! The encoder is a capability behind [`SymbolEncoder`]; [`QrSymbolEncoder`] is the default.

mod error;
mod qr;

use image::GrayImage;
use serde::{Deserialize, Serialize};

pub use error::EncodeError;
pub use qr::QrSymbolEncoder;

/// Error-correction strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcTier {
    #[default]
    Low,
    Medium,
    Quartile,
    High,
}

/// Rasterized symbol, quiet zone included.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolImage {
    image: GrayImage,
    modules: u32,
}

impl SymbolImage {
    pub fn new(image: GrayImage, modules: u32) -> Self {
        Self { image, modules }
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Matrix size in modules, excluding the quiet zone.
    pub fn modules(&self) -> u32 {
        self.modules
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Deterministically encode text into a symbol: same text and tier yield the same matrix.
pub trait SymbolEncoder: Send + Sync {
    fn encode(&self, text: &str, ec: EcTier) -> Result<SymbolImage, EncodeError>;
}
