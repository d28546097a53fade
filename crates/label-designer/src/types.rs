use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DesignerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unsupported file type: {0} (expected PNG, JPEG or PDF)")]
    UnsupportedFile(String),
}

pub type Result<T> = std::result::Result<T, DesignerError>;

/// Label layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Text runs along the tape; top/bottom margins apply
    #[default]
    Standard,
    /// Text runs across the tape; left/right margins apply
    Rotated,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Standard => "standard",
            Orientation::Rotated => "rotated",
        }
    }
}

/// What the label carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintType {
    #[default]
    Text,
    #[serde(rename = "qrcode")]
    QrCode,
    #[serde(rename = "qrcode_text")]
    QrCodeText,
    /// Uploaded PNG/JPEG/PDF; submitted as multipart instead of a plain form
    Image,
}

impl PrintType {
    pub fn as_str(self) -> &'static str {
        match self {
            PrintType::Text => "text",
            PrintType::QrCode => "qrcode",
            PrintType::QrCodeText => "qrcode_text",
            PrintType::Image => "image",
        }
    }

    pub fn is_upload(self) -> bool {
        self == PrintType::Image
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Colour plane; red is only printable on two-colour tape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintColor {
    #[default]
    Black,
    Red,
}

impl PrintColor {
    pub fn as_str(self) -> &'static str {
        match self {
            PrintColor::Black => "black",
            PrintColor::Red => "red",
        }
    }
}

/// QR code error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QrCorrection {
    #[default]
    L,
    M,
    Q,
    H,
}

impl QrCorrection {
    pub fn as_str(self) -> &'static str {
        match self {
            QrCorrection::L => "L",
            QrCorrection::M => "M",
            QrCorrection::Q => "Q",
            QrCorrection::H => "H",
        }
    }
}
