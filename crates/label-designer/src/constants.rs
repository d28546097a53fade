//! Shared constants for the label designer
//!
//! Values the server also assumes (resolution, defaults) and the fixed texts
//! shown in the status and margin controls.

// =============================================================================
// Resolution
// =============================================================================

/// Dots per inch of the rendered preview; the printer driver works at 300 DPI
pub const DEFAULT_DPI: f32 = 300.0;

/// Centimetres per inch
pub const CM_PER_INCH: f32 = 2.54;

/// Convert a pixel count at `dpi` into centimetres
#[inline]
pub fn px_to_cm(px: u32, dpi: f32) -> f32 {
    px as f32 / dpi * CM_PER_INCH
}

// =============================================================================
// Preview
// =============================================================================

/// 1×1 PNG shown once the queued upload is removed
pub const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNgYAAAAAMAASsJTYQAAAAASUVORK5CYII=";

/// Query value asking the preview endpoint for a base64 body
pub const RETURN_FORMAT_BASE64: &str = "base64";

// =============================================================================
// Form
// =============================================================================

/// Sent instead of an empty text field
pub const EMPTY_TEXT_SUBSTITUTE: &str = " ";

/// Line spacing choices, in percent of the font size
pub const LINE_SPACINGS: [u32; 5] = [100, 150, 200, 250, 300];

/// Style names picked automatically after a family change
pub const DEFAULT_STYLE_NAMES: [&str; 2] = ["Book", "Regular"];

/// Multipart part name carrying the uploaded file
pub const UPLOAD_PART_NAME: &str = "image";

// =============================================================================
// Control hints
// =============================================================================

pub const HINT_TOP_BOTTOM_MARGINS: &str = "Only relevant if standard orientation is selected.";
pub const HINT_LEFT_RIGHT_MARGINS: &str = "Only relevant if rotated orientation is selected.";

// =============================================================================
// Status texts
// =============================================================================

pub const STATUS_IN_PROGRESS: &str = "Processing print request...";
pub const STATUS_SUCCESS: &str = "Printing was successful.";
pub const STATUS_FAILURE: &str = "Printing was unsuccessful:";
