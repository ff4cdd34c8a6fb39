use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::domain::{AudioFormat, InvalidValue, JobId, StorageLocation};

/// An off-process speech-to-text engine that runs jobs asynchronously.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Starts a job named `job_id` that reads audio from `source` and writes
    /// the transcript text to `destination`. Returns once the job is accepted.
    async fn start_job(
        &self,
        job_id: &JobId,
        source: &StorageLocation,
        destination: &StorageLocation,
        audio_format: AudioFormat,
    ) -> Result<(), ProviderError>;

    async fn job_status(&self, job_id: &JobId) -> Result<ProviderJobStatus, ProviderError>;
}

/// Job state as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderJobStatus {
    Queued,
    InProgress,
    Failed,
    Completed,
}

impl ProviderJobStatus {
    const ALL: [ProviderJobStatus; 4] = [
        ProviderJobStatus::Queued,
        ProviderJobStatus::InProgress,
        ProviderJobStatus::Failed,
        ProviderJobStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderJobStatus::Queued => "QUEUED",
            ProviderJobStatus::InProgress => "IN_PROGRESS",
            ProviderJobStatus::Failed => "FAILED",
            ProviderJobStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for ProviderJobStatus {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidValue::new("provider job status", s))
    }
}

impl fmt::Display for ProviderJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("job rejected: {0}")]
    Rejected(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
