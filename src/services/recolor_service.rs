use crate::error::{ApiError, CodecError};
use crate::rendering::{codec, panels};
use cvd_transform::{recolor_variant, Deficiency, Recoloring, RgbImage};

/// Output of a full decode -> recolor run
pub struct RecolorOutput {
    pub original: RgbImage,
    pub result: Recoloring,
}

impl RecolorOutput {
    /// Before/after comparison strip
    pub fn panels(&self) -> RgbImage {
        panels::comparison_panels(&self.original, &self.result)
    }
}

/// Decodes uploads, runs the transform pipeline and encodes the result
#[derive(Debug, Clone, Copy)]
pub struct RecolorService {
    max_pixels: u64,
}

impl RecolorService {
    pub fn new(max_pixels: u64) -> Self {
        Self { max_pixels }
    }

    /// Decode `bytes` and run all three pipeline stages
    pub fn recolor_bytes(
        &self,
        bytes: &[u8],
        deficiency: Deficiency,
    ) -> Result<RecolorOutput, CodecError> {
        let original = codec::decode_image(bytes, self.max_pixels)?;
        let result = recolor_variant(&original, deficiency);

        tracing::debug!(
            deficiency = %deficiency,
            width = original.width(),
            height = original.height(),
            "Recolored image"
        );

        Ok(RecolorOutput { original, result })
    }

    /// Decode, recolor and encode only the final recolored image as PNG
    pub fn correct_to_png(&self, bytes: &[u8], deficiency: Deficiency) -> Result<Vec<u8>, CodecError> {
        let output = self.recolor_bytes(bytes, deficiency)?;
        codec::encode_png(&output.result.recolored)
    }

    /// Execute CPU-intensive decoding and recoloring in a blocking context
    ///
    /// Keeps the async runtime responsive while large uploads are processed.
    pub async fn correct_in_blocking_context<B>(
        &self,
        bytes: B,
        deficiency: Deficiency,
    ) -> Result<Vec<u8>, ApiError>
    where
        B: AsRef<[u8]> + Send + 'static,
    {
        let service = *self;

        let png_bytes = tokio::task::spawn_blocking(move || {
            service.correct_to_png(bytes.as_ref(), deficiency)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("Recolor task failed: {e}")))??;

        Ok(png_bytes)
    }
}

impl Default for RecolorService {
    fn default() -> Self {
        Self::new(crate::models::AppConfig::default().max_pixels)
    }
}
