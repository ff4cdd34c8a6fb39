use async_trait::async_trait;

use crate::domain::{JobId, StorageLocation, Transcript, TranscriptStatus};

use super::RepositoryError;

#[async_trait]
pub trait TranscriptRepository: Send + Sync {
    async fn add_to_session(
        &self,
        session_id: &str,
        transcript: &Transcript,
    ) -> Result<Transcript, RepositoryError>;

    /// Fails with [`RepositoryError::NotFound`] when no record has this job id.
    async fn get(&self, job_id: &JobId) -> Result<Transcript, RepositoryError>;

    /// Oldest first. A session without transcripts yields an empty list.
    async fn list_for_session(&self, session_id: &str) -> Result<Vec<Transcript>, RepositoryError>;

    /// Moves a record from `expected` to `status`, optionally recording where the
    /// summary was written. Fails with [`RepositoryError::ConcurrentModification`]
    /// if the stored status is no longer `expected`.
    async fn update_status(
        &self,
        job_id: &JobId,
        expected: TranscriptStatus,
        status: TranscriptStatus,
        summary_location: Option<&StorageLocation>,
    ) -> Result<(), RepositoryError>;
}
