mod error_kind;
mod transcription_service;

pub use error_kind::ErrorKind;
pub use transcription_service::{TranscriptionService, TranscriptionServiceError};
