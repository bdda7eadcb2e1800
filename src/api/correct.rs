use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use cvd_transform::Deficiency;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;

/// Name of the multipart field carrying the uploaded image
pub const IMAGE_FIELD: &str = "image";

/// Multipart form accepted by the correction endpoint
#[derive(Debug, ToSchema)]
#[allow(dead_code)] // OpenAPI schema only; the form is read field by field
pub struct CorrectUpload {
    /// Image file (PNG, JPEG, GIF, BMP, WebP or TIFF)
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// Error response for the correction endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct CorrectErrorResponse {
    /// Error message
    pub error: String,
}

/// Recolor an uploaded image for a colour-vision deficiency
///
/// Daltonizes the image and returns it as the deficient viewer would
/// perceive it, encoded as PNG.
#[utoipa::path(
    post,
    path = "/correct/{deficiency}",
    request_body(content = CorrectUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Recolored PNG image", content_type = "image/png"),
        (status = 400, description = "Unknown deficiency, missing file or undecodable image", body = CorrectErrorResponse),
        (status = 413, description = "Upload exceeds the configured size limit", body = CorrectErrorResponse),
    ),
    params(
        ("deficiency" = String, Path, description = "One of: protanopia, deuteranopia, tritanopia"),
    ),
    tag = "Correction"
)]
pub async fn handle_correct(
    State(state): State<AppState>,
    Path(deficiency): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    // Validate the deficiency before touching the body
    let deficiency: Deficiency = deficiency.parse().map_err(|e| {
        tracing::warn!(%e, "Rejected correction request");
        ApiError::from(e)
    })?;

    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(%e, "Request is not a multipart form");
        ApiError::MissingImage
    })?;

    let image_bytes = read_image_field(&mut multipart)
        .await?
        .ok_or(ApiError::MissingImage)?;

    tracing::info!(
        deficiency = %deficiency,
        upload_bytes = image_bytes.len(),
        "Correction request received"
    );

    let png_bytes = state
        .recolor
        .correct_in_blocking_context(image_bytes, deficiency)
        .await
        .inspect_err(|e| tracing::warn!(%e, deficiency = %deficiency, "Correction failed"))?;

    tracing::info!(size_bytes = png_bytes.len(), "Recolored image encoded");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"recolored.png\"",
            ),
        ],
        Bytes::from(png_bytes),
    )
        .into_response())
}

/// Read fields until the image field is found
async fn read_image_field(multipart: &mut Multipart) -> Result<Option<Bytes>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(IMAGE_FIELD) {
            let data = field.bytes().await.map_err(multipart_error)?;
            return Ok(Some(data));
        }
    }
    Ok(None)
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(e.body_text())
    } else {
        ApiError::Multipart(e.body_text())
    }
}
