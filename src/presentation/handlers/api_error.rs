use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{ErrorKind, TranscriptionServiceError};
use crate::domain::InvalidValue;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] TranscriptionServiceError),
    #[error(transparent)]
    InvalidValue(#[from] InvalidValue),
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Service(e) => e.kind(),
            ApiError::InvalidValue(_) | ApiError::UnsupportedContentType(_) => {
                ErrorKind::InvalidEntity
            }
        }
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidEntity => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Conflicted | ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = status_for(kind);

        let error = match (kind, &self) {
            (ErrorKind::Internal, _) => {
                tracing::error!(error = %self, "Request failed");
                "Internal server error".to_string()
            }
            (_, ApiError::UnsupportedContentType(content_type)) => format!(
                "Content-Type {} not supported. Supported types are audio/mpeg, audio/mp4, \
                 audio/wav, audio/flac, audio/amr, audio/ogg, audio/webm",
                content_type
            ),
            _ => {
                tracing::warn!(error = %self, status = %status, "Request rejected");
                self.to_string()
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
