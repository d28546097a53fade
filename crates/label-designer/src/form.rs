use crate::types::*;
use serde::{Deserialize, Serialize};

/// Live values of every designer control
///
/// This is the only place form values are kept. Requests are built from it
/// on demand and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    // Content
    pub text: String,
    pub print_type: PrintType,

    // Typography
    pub font_family: String,
    pub font_style: String,
    pub font_size: u32,
    pub align: TextAlign,
    /// Percent of the font size
    pub line_spacing: u32,

    // Label
    pub label_size: String,
    pub orientation: Orientation,

    // Margins, in percent of the font size
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,

    // QR code
    pub qrcode_size: u32,
    pub qrcode_correction: QrCorrection,

    // Printing
    pub print_count: u32,
    pub print_color: PrintColor,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            print_type: PrintType::Text,
            font_family: "DejaVu Serif".to_string(),
            font_style: "Book".to_string(),
            font_size: 70,
            align: TextAlign::Center,
            line_spacing: 100,
            label_size: "62".to_string(),
            orientation: Orientation::Standard,
            margin_top: 24,
            margin_bottom: 45,
            margin_left: 35,
            margin_right: 35,
            qrcode_size: 10,
            qrcode_correction: QrCorrection::L,
            print_count: 1,
            print_color: PrintColor::Black,
        }
    }
}
