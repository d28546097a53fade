use crate::constants::EMPTY_TEXT_SUBSTITUTE;
use crate::form::FormState;
use crate::types::*;
use serde::Serialize;

/// Everything the preview and print endpoints need, taken from the form at
/// one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintRequest {
    pub text: String,
    pub font_family: String,
    pub font_style: String,
    pub font_size: u32,
    pub label_size: String,
    pub align: TextAlign,
    pub orientation: Orientation,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub print_type: PrintType,
    pub qrcode_size: u32,
    pub qrcode_correction: QrCorrection,
    pub print_count: u32,
    pub print_color: PrintColor,
    pub line_spacing: u32,
    /// 1 only for the explicit "print and cut once" action
    pub cut_once: u8,
}

impl PrintRequest {
    pub fn from_form(form: &FormState, cut_once: bool) -> Self {
        let text = if form.text.is_empty() {
            EMPTY_TEXT_SUBSTITUTE.to_string()
        } else {
            form.text.clone()
        };

        Self {
            text,
            font_family: form.font_family.clone(),
            font_style: form.font_style.clone(),
            font_size: form.font_size,
            label_size: form.label_size.clone(),
            align: form.align,
            orientation: form.orientation,
            margin_top: form.margin_top,
            margin_bottom: form.margin_bottom,
            margin_left: form.margin_left,
            margin_right: form.margin_right,
            print_type: form.print_type,
            qrcode_size: form.qrcode_size,
            qrcode_correction: form.qrcode_correction,
            print_count: form.print_count,
            print_color: form.print_color,
            line_spacing: form.line_spacing,
            cut_once: u8::from(cut_once),
        }
    }

    /// Wire fields in submission order, shared by form and multipart encoding
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("text", self.text.clone()),
            ("font_family", self.font_family.clone()),
            ("font_style", self.font_style.clone()),
            ("font_size", self.font_size.to_string()),
            ("label_size", self.label_size.clone()),
            ("align", self.align.as_str().to_string()),
            ("orientation", self.orientation.as_str().to_string()),
            ("margin_top", self.margin_top.to_string()),
            ("margin_bottom", self.margin_bottom.to_string()),
            ("margin_left", self.margin_left.to_string()),
            ("margin_right", self.margin_right.to_string()),
            ("print_type", self.print_type.as_str().to_string()),
            ("qrcode_size", self.qrcode_size.to_string()),
            ("qrcode_correction", self.qrcode_correction.as_str().to_string()),
            ("print_count", self.print_count.to_string()),
            ("print_color", self.print_color.as_str().to_string()),
            ("line_spacing", self.line_spacing.to_string()),
            ("cut_once", self.cut_once.to_string()),
        ]
    }
}
