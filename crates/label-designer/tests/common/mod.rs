#![allow(dead_code)]

use label_designer::*;
use std::io::Cursor;

/// Base64 PNG of a white image, as the preview endpoint returns it
pub fn png_base64(width: u32, height: u32) -> String {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    base64::encode(bytes)
}

pub fn preview_image(width: u32, height: u32) -> PreviewImage {
    PreviewImage::from_base64(&png_base64(width, height)).unwrap()
}

pub fn png_file(name: &str) -> QueuedFile {
    QueuedFile::new(name, base64::decode(png_base64(4, 2)).unwrap()).unwrap()
}

pub fn designer() -> Designer {
    Designer::new(&DesignerSettings::default())
}

/// Report the upload of the queued file as finished
pub fn settle(designer: &mut Designer) -> Vec<DesignerCommand> {
    let upload = designer.uploads().id().expect("no queued file");
    designer.apply(DesignerUpdate::UploadSettled { upload })
}
