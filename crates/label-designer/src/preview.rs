use crate::constants::{PLACEHOLDER_PNG_BASE64, px_to_cm};
use crate::types::*;

/// Tag attached to each preview request; larger means newer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PreviewTicket(pub u64);

impl PreviewTicket {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A rendered label as returned by the preview endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    /// Encoded image exactly as received
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    /// Decoded pixels, RGBA8, row-major
    pub rgba: Vec<u8>,
}

impl PreviewImage {
    /// Decode the base64 body of a preview response
    pub fn from_base64(payload: &str) -> Result<Self> {
        let png = base64::decode(payload.trim())?;
        Self::from_png(png)
    }

    pub fn from_png(png: Vec<u8>) -> Result<Self> {
        let decoded = image::load_from_memory(&png)?.to_rgba8();
        let (width_px, height_px) = decoded.dimensions();

        Ok(Self {
            png,
            width_px,
            height_px,
            rgba: decoded.into_raw(),
        })
    }

    /// Blank 1×1 image shown when there is nothing to preview
    pub fn placeholder() -> Self {
        match Self::from_base64(PLACEHOLDER_PNG_BASE64) {
            Ok(image) => image,
            Err(e) => {
                log::error!("Placeholder image failed to decode: {}", e);
                Self {
                    png: Vec::new(),
                    width_px: 1,
                    height_px: 1,
                    rgba: vec![255, 255, 255, 0],
                }
            }
        }
    }

    /// Printed size in centimetres (width, height)
    pub fn physical_size_cm(&self, dpi: f32) -> (f32, f32) {
        (px_to_cm(self.width_px, dpi), px_to_cm(self.height_px, dpi))
    }

    /// Size readout as shown next to the preview, e.g. `5.3 × 2.1 cm`
    pub fn size_label(&self, dpi: f32) -> String {
        let (width, height) = self.physical_size_cm(dpi);
        format!("{:.1} × {:.1} cm", width, height)
    }
}
