mod api_error;
mod audio_content_type;
mod health;
mod transcripts;

pub use api_error::{ApiError, ErrorResponse};
pub use audio_content_type::audio_format_from_content_type;
pub use health::health_handler;
pub use transcripts::{
    TranscriptResponse, UpdateStatusRequest, download_transcript_handler, get_transcript_handler,
    list_transcripts_handler, refresh_transcript_handler, submit_transcript_handler,
    update_status_handler,
};
