use image::GrayImage;
use qrcode::{EcLevel, QrCode};

use crate::error::{QRError, QRResult};
use crate::render::render_fitted;

/// Default edge length, in pixels, of a generated barcode bitmap.
pub const DEFAULT_SIZE: u32 = 200;

// Builder
//------------------------------------------------------------------------------

/// Builds a QR code bitmap from text, with configurable pixel dimensions.
///
/// Width and height default to [`DEFAULT_SIZE`]. The error correction level
/// is fixed at L, the underlying writer's default, and is deliberately not a
/// parameter.
///
/// ```rust
/// use qrgen::BarcodeBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = BarcodeBuilder::new("https://example.com").width(300).height(300).render()?;
/// assert_eq!(img.dimensions(), (300, 300));
/// # Ok(())
/// # }
/// ```
pub struct BarcodeBuilder<'a> {
    text: &'a str,
    width: u32,
    height: u32,
}

impl<'a> BarcodeBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, width: DEFAULT_SIZE, height: DEFAULT_SIZE }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = width;
        self
    }

    pub fn height(&mut self, height: u32) -> &mut Self {
        self.height = height;
        self
    }

    /// Encodes the text and renders it into a fresh grayscale bitmap.
    ///
    /// Produces exactly one bitmap or exactly one [`QRError`]; repeated calls
    /// return independent buffers.
    pub fn render(&self) -> QRResult<GrayImage> {
        if self.text.is_empty() {
            return Err(QRError::EmptyData);
        }
        if self.width == 0 || self.height == 0 {
            return Err(QRError::InvalidDimensions { width: self.width, height: self.height });
        }

        let code = QrCode::with_error_correction_level(self.text, EcLevel::L)?;
        Ok(render_fitted(&code, self.width, self.height))
    }
}

/// Encodes `text` as a QR code and renders it as a `width x height` grayscale
/// bitmap.
///
/// Shorthand for [`BarcodeBuilder`] with explicit dimensions; use the builder
/// when the [`DEFAULT_SIZE`] defaults are wanted.
///
/// ```rust
/// use qrgen::generate_bar_code;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = generate_bar_code("Hello, world!", 200, 200)?;
/// assert_eq!(img.dimensions(), (200, 200));
/// # Ok(())
/// # }
/// ```
pub fn generate_bar_code(text: &str, width: u32, height: u32) -> QRResult<GrayImage> {
    BarcodeBuilder::new(text).width(width).height(height).render()
}
