//! cvd-transform: colour-vision-deficiency simulation and daltonization
//!
//! This library applies fixed 3x3 linear transforms to 8-bit RGB images to
//! show how a viewer with protanopia, deuteranopia or tritanopia perceives
//! them, and to pre-correct ("daltonize") them so those viewers can tell
//! colours apart again.
//!
//! # Quick Start
//!
//! ```
//! use cvd_transform::{lookup_variant, recolor, RgbImage};
//!
//! let image = RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
//! let pair = lookup_variant("protanopia").unwrap();
//!
//! let result = recolor(&image, &pair.simulation, &pair.daltonization);
//! assert_eq!(result.simulated.pixels()[0], [144, 142, 0]);
//! assert_eq!(result.recolored.dimensions(), (2, 1));
//! ```
//!
//! # Pipeline
//!
//! ```text
//!                 ┌──> apply(simulation) ───────────────────────> simulated
//! original image ─┤
//!                 └──> apply(daltonization) ──> daltonized ──┬──> daltonized
//!                                                            │
//!                                 apply(simulation) <────────┘
//!                                         │
//!                                         └──> recolored
//! ```
//!
//! `simulated` previews the original through the deficient viewer's eyes.
//! `recolored` previews the daltonized image through the same eyes, which
//! shows a normal-sighted operator what the correction achieves.
//!
//! # Catalog
//!
//! | Variant | Affected cones |
//! |---------|----------------|
//! | [`Deficiency::Protanopia`] | long-wavelength (red) |
//! | [`Deficiency::Deuteranopia`] | medium-wavelength (green) |
//! | [`Deficiency::Tritanopia`] | short-wavelength (blue) |
//!
//! Names are matched case-sensitively; only the lowercase forms resolve.

pub mod catalog;
pub mod error;
pub mod image;
pub mod matrix;
pub mod pipeline;


pub use catalog::{lookup_variant, Deficiency, MatrixPair};
pub use error::{CvdError, ImageError, UnknownVariant};
pub use image::RgbImage;
pub use matrix::Matrix3;
pub use pipeline::{
    apply_matrix, recolor, recolor_named, recolor_variant, recolor_with, transform_pixel,
    Recoloring,
};
