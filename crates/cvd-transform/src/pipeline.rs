//! Matrix application and the simulate / daltonize / recolor pipeline
//!
//! # Numeric semantics
//!
//! [`apply_matrix`] processes each pixel in four steps:
//!
//! ```text
//! u8 channel ──/255 (f32)──> [0,1] ──matrix (f64)──> clamp [0,1] ──x255, truncate──> u8
//! ```
//!
//! The final narrowing truncates toward zero. It never rounds, so a
//! channel that lands on 127.9999 becomes 127. Golden fixtures depend on
//! this.

use crate::catalog::{lookup_variant, Deficiency, MatrixPair};
use crate::error::UnknownVariant;
use crate::image::RgbImage;
use crate::matrix::Matrix3;

/// The three images produced by [`recolor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recoloring {
    /// The daltonized image as the deficient viewer perceives it.
    pub recolored: RgbImage,
    /// The original image as the deficient viewer perceives it.
    pub simulated: RgbImage,
    /// The original image after daltonization.
    pub daltonized: RgbImage,
}

impl Recoloring {
    /// `(recolored, simulated, daltonized)`
    pub fn into_parts(self) -> (RgbImage, RgbImage, RgbImage) {
        (self.recolored, self.simulated, self.daltonized)
    }
}

/// Normalize an 8-bit channel to [0, 1].
///
/// The division happens in single precision before widening.
#[inline]
fn normalize(channel: u8) -> f64 {
    (channel as f32 / 255.0) as f64
}

/// Clamp to [0, 1], scale to [0, 255] and truncate.
#[inline]
fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Apply `matrix` to a single pixel.
///
/// # Example
///
/// ```
/// use cvd_transform::{transform_pixel, Deficiency};
///
/// let sim = &Deficiency::Protanopia.matrices().simulation;
/// assert_eq!(transform_pixel([255, 0, 0], sim), [144, 142, 0]);
/// ```
#[inline]
pub fn transform_pixel(pixel: [u8; 3], matrix: &Matrix3) -> [u8; 3] {
    let [r, g, b] = matrix.apply([normalize(pixel[0]), normalize(pixel[1]), normalize(pixel[2])]);
    [quantize(r), quantize(g), quantize(b)]
}

/// Apply `matrix` to every pixel of `image`, producing a new image of the
/// same dimensions.
pub fn apply_matrix(image: &RgbImage, matrix: &Matrix3) -> RgbImage {
    image.map_pixels(|px| transform_pixel(px, matrix))
}

/// Run the three-stage pipeline.
///
/// 1. `simulated = apply_matrix(image, simulation)`
/// 2. `daltonized = apply_matrix(image, daltonization)`
/// 3. `recolored = apply_matrix(daltonized, simulation)`
///
/// Stage 3 consumes the quantized output of stage 2; nothing else happens
/// between stages.
pub fn recolor(image: &RgbImage, simulation: &Matrix3, daltonization: &Matrix3) -> Recoloring {
    let simulated = apply_matrix(image, simulation);
    let daltonized = apply_matrix(image, daltonization);
    let recolored = apply_matrix(&daltonized, simulation);
    Recoloring {
        recolored,
        simulated,
        daltonized,
    }
}

/// [`recolor`] with a catalog pair.
pub fn recolor_with(image: &RgbImage, pair: &MatrixPair) -> Recoloring {
    recolor(image, &pair.simulation, &pair.daltonization)
}

/// [`recolor`] with the catalog pair of `deficiency`.
pub fn recolor_variant(image: &RgbImage, deficiency: Deficiency) -> Recoloring {
    recolor_with(image, deficiency.matrices())
}

/// Look up `name` and run [`recolor`].
///
/// An unknown name fails before any pixel is touched.
pub fn recolor_named(image: &RgbImage, name: &str) -> Result<Recoloring, UnknownVariant> {
    let pair = lookup_variant(name)?;
    Ok(recolor_with(image, &pair))
}
