mod audio_format;
mod invalid_value;
mod job_id;
mod session_scope;
mod storage_location;
mod transcript;
mod transcript_status;

pub use audio_format::AudioFormat;
pub use invalid_value::InvalidValue;
pub use job_id::JobId;
pub use session_scope::SessionScope;
pub use storage_location::StorageLocation;
pub use transcript::Transcript;
pub use transcript_status::TranscriptStatus;
