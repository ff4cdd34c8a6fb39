use chrono::{DateTime, Utc};

use super::{AudioFormat, JobId, StorageLocation, TranscriptStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub job_id: JobId,
    pub audio_location: StorageLocation,
    pub audio_format: AudioFormat,
    pub transcript_location: StorageLocation,
    pub summary_location: StorageLocation,
    pub status: TranscriptStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transcript {
    /// A record for a job that is handed to the provider right away.
    pub fn submitted(
        job_id: JobId,
        audio_location: StorageLocation,
        audio_format: AudioFormat,
        transcript_location: StorageLocation,
    ) -> Self {
        Self::with_status(
            job_id,
            audio_location,
            audio_format,
            transcript_location,
            TranscriptStatus::Transcribing,
        )
    }

    /// A record created by backfill paths before any provider job exists.
    pub fn not_started(
        job_id: JobId,
        audio_location: StorageLocation,
        audio_format: AudioFormat,
        transcript_location: StorageLocation,
    ) -> Self {
        Self::with_status(
            job_id,
            audio_location,
            audio_format,
            transcript_location,
            TranscriptStatus::NotStarted,
        )
    }

    fn with_status(
        job_id: JobId,
        audio_location: StorageLocation,
        audio_format: AudioFormat,
        transcript_location: StorageLocation,
        status: TranscriptStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            job_id,
            audio_location,
            audio_format,
            transcript_location,
            summary_location: StorageLocation::empty(),
            status,
            created_at: now,
            updated_at: now,
        }
    }
}
