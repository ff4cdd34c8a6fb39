use std::sync::Arc;
use std::time::Duration;

use crate::application::services::TranscriptionService;

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub request_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        transcription_service: Arc<TranscriptionService>,
        request_timeout: Duration,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            transcription_service,
            request_timeout,
            max_upload_bytes,
        }
    }
}
