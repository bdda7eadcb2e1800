use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cvd_transform::{ImageError, UnknownVariant};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid deficiency, choose from {0:?}")]
    UnknownDeficiency(Vec<&'static str>),

    #[error("No image file provided")]
    MissingImage,

    #[error("Malformed multipart body: {0}")]
    Multipart(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UnknownVariant> for ApiError {
    fn from(_: UnknownVariant) -> Self {
        ApiError::UnknownDeficiency(cvd_transform::Deficiency::names())
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Cannot decode image: {0}")]
    Decode(String),

    #[error("Image too large: {width}x{height} (max {max} pixels)")]
    TooManyPixels { width: u32, height: u32, max: u64 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Invalid image buffer: {0}")]
    Image(#[from] ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownDeficiency(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingImage => StatusCode::BAD_REQUEST,
            ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Codec(CodecError::Decode(_) | CodecError::TooManyPixels { .. }) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Codec(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
