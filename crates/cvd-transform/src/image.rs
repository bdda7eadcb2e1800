//! 8-bit RGB image buffer
//!
//! [`RgbImage`] is the unit of work for the pipeline: a row-major grid of
//! `[u8; 3]` pixels whose length always matches its dimensions.

use crate::error::ImageError;

/// A width x height grid of 8-bit RGB pixels in row-major order.
///
/// Channel order is R, G, B. Decoders that produce another order must
/// reorder before constructing the image.
///
/// # Example
///
/// ```
/// use cvd_transform::RgbImage;
///
/// let image = RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.pixel(1, 0), Some([0, 0, 255]));
/// assert_eq!(image.into_raw(), vec![255, 0, 0, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl RgbImage {
    /// Create an image from pixels in row-major order.
    ///
    /// Fails with [`ImageError::DimensionMismatch`] unless
    /// `pixels.len() == width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<[u8; 3]>) -> Result<Self, ImageError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(ImageError::DimensionMismatch {
                width,
                height,
                pixels: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image from interleaved `RGBRGB...` bytes.
    pub fn from_raw(width: usize, height: usize, raw: Vec<u8>) -> Result<Self, ImageError> {
        if raw.len() % 3 != 0 {
            return Err(ImageError::TruncatedPixel { len: raw.len() });
        }
        let pixels = raw
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Self::new(width, height, pixels)
    }

    /// An image filled with a single colour.
    pub fn filled(width: usize, height: usize, color: [u8; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Mutable pixels, row-major. The length is fixed by the dimensions.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[u8; 3]] {
        &mut self.pixels
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// One row of pixels.
    pub fn row(&self, y: usize) -> Option<&[[u8; 3]]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Interleaved `RGBRGB...` bytes.
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Consume the image into interleaved `RGBRGB...` bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.to_raw()
    }

    /// Build a new image of the same dimensions by mapping every pixel.
    pub fn map_pixels(&self, f: impl Fn([u8; 3]) -> [u8; 3]) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }
}
