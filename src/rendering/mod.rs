pub mod codec;
pub mod panels;

pub use codec::{decode_image, encode_png, load_image, save_png};
pub use panels::{comparison_panels, compose_strip};
