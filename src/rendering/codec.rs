use crate::error::CodecError;
use cvd_transform::RgbImage;
use std::io::Cursor;
use std::path::Path;

/// Decode an encoded image (PNG, JPEG, GIF, BMP, WebP, TIFF) into RGB pixels.
///
/// Channel order is normalized to R, G, B regardless of the source format;
/// alpha is discarded and grayscale is expanded to three equal channels.
/// Images with more than `max_pixels` pixels are rejected before the
/// pixel data is decoded.
pub fn decode_image(bytes: &[u8], max_pixels: u64) -> Result<RgbImage, CodecError> {
    let (width, height) = reader(bytes)?
        .into_dimensions()
        .map_err(|e| CodecError::Decode(e.to_string()))?;

    if width as u64 * height as u64 > max_pixels {
        return Err(CodecError::TooManyPixels {
            width,
            height,
            max: max_pixels,
        });
    }

    let decoded = reader(bytes)?
        .decode()
        .map_err(|e| CodecError::Decode(e.to_string()))?;
    let rgb = decoded.to_rgb8();

    tracing::debug!(width, height, color = ?decoded.color(), "Decoded image");

    Ok(RgbImage::from_raw(
        width as usize,
        height as usize,
        rgb.into_raw(),
    )?)
}

fn reader(bytes: &[u8]) -> Result<image::ImageReader<Cursor<&[u8]>>, CodecError> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CodecError::Decode(e.to_string()))
}

/// Encode RGB pixels as an 8-bit truecolor PNG.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, CodecError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(CodecError::PngEncode(format!(
            "cannot encode empty {}x{} image",
            image.width(),
            image.height()
        )));
    }
    let width = u32::try_from(image.width())
        .map_err(|_| CodecError::PngEncode(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| CodecError::PngEncode(format!("height {} too large", image.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&image.to_raw())
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Read and decode an image file.
pub fn load_image(path: &Path, max_pixels: u64) -> Result<RgbImage, CodecError> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes, max_pixels)
}

/// Encode and write a PNG file.
pub fn save_png(path: &Path, image: &RgbImage) -> Result<(), CodecError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
