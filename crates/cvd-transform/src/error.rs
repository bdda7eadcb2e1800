//! Error types for catalog lookups and image construction.
//!
//! [`CvdError`] wraps every error of the crate into a single enum for
//! convenient `?` propagation in application code.

use std::fmt;

/// Returned when a deficiency name is not one of the supported variants.
///
/// Lookups are case-sensitive, so `"Protanopia"` is as unknown as `"foo"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    /// The name that failed to resolve.
    pub name: String,
}

impl UnknownVariant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown deficiency '{}' (expected one of: protanopia, deuteranopia, tritanopia)",
            self.name
        )
    }
}

impl std::error::Error for UnknownVariant {}

/// Returned when an image buffer does not match its declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The number of pixels (or raw bytes / 3) differs from `width * height`.
    DimensionMismatch {
        /// Declared width in pixels
        width: usize,
        /// Declared height in pixels
        height: usize,
        /// Number of pixels actually supplied
        pixels: usize,
    },
    /// A raw byte buffer whose length is not a multiple of three.
    TruncatedPixel {
        /// Length of the raw buffer in bytes
        len: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::DimensionMismatch {
                width,
                height,
                pixels,
            } => write!(
                f,
                "pixel count {} does not match dimensions {}x{}",
                pixels, width, height
            ),
            ImageError::TruncatedPixel { len } => {
                write!(f, "raw buffer length {} is not a multiple of 3", len)
            }
        }
    }
}

impl std::error::Error for ImageError {}

/// Unified error type for the cvd-transform public API.
///
/// # Example
///
/// ```
/// use cvd_transform::{recolor_named, CvdError, RgbImage};
///
/// fn preview(name: &str) -> Result<RgbImage, CvdError> {
///     let image = RgbImage::from_raw(1, 1, vec![255, 0, 0])?;
///     Ok(recolor_named(&image, name)?.recolored)
/// }
///
/// assert!(preview("protanopia").is_ok());
/// assert!(matches!(preview("achromatopsia"), Err(CvdError::UnknownVariant(_))));
/// ```
#[derive(Debug)]
pub enum CvdError {
    /// Deficiency name not in the catalog
    UnknownVariant(UnknownVariant),
    /// Image buffer inconsistent with its dimensions
    Image(ImageError),
}

impl fmt::Display for CvdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvdError::UnknownVariant(err) => write!(f, "catalog error: {}", err),
            CvdError::Image(err) => write!(f, "image error: {}", err),
        }
    }
}

impl std::error::Error for CvdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CvdError::UnknownVariant(err) => Some(err),
            CvdError::Image(err) => Some(err),
        }
    }
}

impl From<UnknownVariant> for CvdError {
    fn from(err: UnknownVariant) -> Self {
        CvdError::UnknownVariant(err)
    }
}

impl From<ImageError> for CvdError {
    fn from(err: ImageError) -> Self {
        CvdError::Image(err)
    }
}
