//! Test fixtures and constants.

use cvd_recolor::rendering::encode_png;
use cvd_transform::RgbImage;
use std::io::Cursor;

/// Multipart boundary used by all test bodies
pub const BOUNDARY: &str = "cvd-recolor-test-boundary";

/// Content-Type header value matching [`BOUNDARY`]
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Multipart body with a single file field
pub fn multipart_body(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    push_file_part(&mut body, field, filename, data);
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Multipart body with a text field followed by a file field
pub fn multipart_body_with_text(text_field: &str, text: &str, field: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{text_field}\"\r\n\r\n{text}\r\n"
        )
        .as_bytes(),
    );
    push_file_part(&mut body, field, "upload.png", data);
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn push_file_part(body: &mut Vec<u8>, field: &str, filename: &str, data: &[u8]) {
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(b"\r\n");
}

/// 4x2 swatch: primaries, mid-grey, white, an odd colour, yellow and black
pub fn swatch() -> RgbImage {
    RgbImage::new(
        4,
        2,
        vec![
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [128, 128, 128],
            [255, 255, 255],
            [200, 100, 50],
            [255, 255, 0],
            [0, 0, 0],
        ],
    )
    .unwrap()
}

/// The swatch encoded as PNG
pub fn swatch_png() -> Vec<u8> {
    encode_png(&swatch()).expect("Failed to encode swatch")
}

/// A solid colour encoded as PNG
pub fn solid_png(width: usize, height: usize, color: [u8; 3]) -> Vec<u8> {
    encode_png(&RgbImage::filled(width, height, color)).expect("Failed to encode image")
}

/// A solid colour encoded as JPEG
pub fn solid_jpeg(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let buffer = image::RgbImage::from_pixel(width, height, image::Rgb(color));
    let mut bytes = Vec::new();
    buffer
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .expect("Failed to encode JPEG");
    bytes
}
