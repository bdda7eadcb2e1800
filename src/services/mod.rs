pub mod recolor_service;

pub use recolor_service::{RecolorOutput, RecolorService};
