use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use tokio::io::AsyncWrite;

use crate::application::ports::{
    BlobStore, BlobStoreError, IdGenerator, ProviderError, ProviderJobStatus, RepositoryError,
    TranscriptRepository, TranscriptionProvider,
};
use crate::domain::{
    AudioFormat, JobId, SessionScope, StorageLocation, Transcript, TranscriptStatus,
};

use super::ErrorKind;

/// Coordinates the transcript repository, the blob store and the transcription
/// provider. Holds no state of its own beyond the blob container name.
pub struct TranscriptionService {
    container: String,
    repository: Arc<dyn TranscriptRepository>,
    blob_store: Arc<dyn BlobStore>,
    provider: Arc<dyn TranscriptionProvider>,
    id_generator: Arc<dyn IdGenerator>,
}

impl TranscriptionService {
    pub fn new(
        container: impl Into<String>,
        repository: Arc<dyn TranscriptRepository>,
        blob_store: Arc<dyn BlobStore>,
        provider: Arc<dyn TranscriptionProvider>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            container: container.into(),
            repository,
            blob_store,
            provider,
            id_generator,
        }
    }

    /// Records a new job, uploads its audio and starts it at the provider, in
    /// that order. The record is written first so that a failure in a later
    /// step still leaves a `Transcribing` record behind for reconciliation;
    /// nothing is rolled back.
    #[tracing::instrument(
        skip(self, scope, audio),
        fields(
            user_id = %scope.user_id(),
            campaign_id = %scope.campaign_id(),
            session_id = %scope.session_id(),
            audio_format = %audio_format,
        )
    )]
    pub async fn submit_job(
        &self,
        scope: &SessionScope,
        audio_format: AudioFormat,
        audio: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<Transcript, TranscriptionServiceError> {
        let transcript = Transcript::submitted(
            scope.job_id(&self.id_generator.new_id()),
            scope.audio_location(&self.id_generator.new_id()),
            audio_format,
            scope.transcript_location(&self.id_generator.new_id()),
        );
        let job_id = transcript.job_id.clone();

        self.repository
            .add_to_session(scope.session_id(), &transcript)
            .await
            .map_err(|e| {
                tracing::error!(job_id = %job_id, error = %e, "Failed to persist transcript record");
                TranscriptionServiceError::Persist(e)
            })?;

        let uploaded = self
            .blob_store
            .upload(&self.container, &transcript.audio_location, audio)
            .await
            .map_err(|source| {
                tracing::error!(
                    job_id = %job_id,
                    location = %transcript.audio_location,
                    error = %source,
                    "Audio upload failed, record left without audio"
                );
                TranscriptionServiceError::Upload {
                    job_id: job_id.clone(),
                    source,
                }
            })?;

        self.provider
            .start_job(
                &transcript.job_id,
                &transcript.audio_location,
                &transcript.transcript_location,
                audio_format,
            )
            .await
            .map_err(|source| {
                tracing::error!(
                    job_id = %job_id,
                    error = %source,
                    "Provider rejected job, record and audio left without a provider job"
                );
                TranscriptionServiceError::StartJob {
                    job_id: job_id.clone(),
                    source,
                }
            })?;

        tracing::info!(job_id = %job_id, bytes = uploaded, "Transcription job submitted");

        Ok(transcript)
    }

    #[tracing::instrument(skip(self), fields(job_id = %job_id))]
    pub async fn get_job(&self, job_id: &JobId) -> Result<Transcript, TranscriptionServiceError> {
        self.repository
            .get(job_id)
            .await
            .map_err(TranscriptionServiceError::Lookup)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_for_session(
        &self,
        session_id: &str,
    ) -> Result<Vec<Transcript>, TranscriptionServiceError> {
        self.repository
            .list_for_session(session_id)
            .await
            .map_err(TranscriptionServiceError::Lookup)
    }

    /// Copies the transcript text into `sink`. Only allowed once the provider
    /// has produced the text; earlier states fail with `Conflicted`.
    #[tracing::instrument(skip(self, sink), fields(job_id = %job_id))]
    pub async fn download_transcript(
        &self,
        job_id: &JobId,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, TranscriptionServiceError> {
        let transcript = self.get_job(job_id).await?;

        if !transcript.status.has_transcript_text() {
            return Err(TranscriptionServiceError::Conflicted {
                job_id: transcript.job_id,
                status: transcript.status,
                reason: "transcript text is not available",
            });
        }

        self.blob_store
            .download(&self.container, &transcript.transcript_location, sink)
            .await
            .map_err(|source| TranscriptionServiceError::Download {
                job_id: transcript.job_id,
                source,
            })
    }

    /// Applies one forward transition, as reported by whatever drives jobs to
    /// completion (a provider webhook or a poller). `summary_location` is only
    /// accepted together with `Done`.
    #[tracing::instrument(skip(self, summary_location), fields(job_id = %job_id, next = %next))]
    pub async fn advance_status(
        &self,
        job_id: &JobId,
        next: TranscriptStatus,
        summary_location: Option<StorageLocation>,
    ) -> Result<Transcript, TranscriptionServiceError> {
        let transcript = self.get_job(job_id).await?;
        self.transition(transcript, next, summary_location).await
    }

    /// Asks the provider how a `Transcribing` job is doing and records the
    /// outcome. Jobs in any other state are returned untouched.
    #[tracing::instrument(skip(self), fields(job_id = %job_id))]
    pub async fn refresh_from_provider(
        &self,
        job_id: &JobId,
    ) -> Result<Transcript, TranscriptionServiceError> {
        let transcript = self.get_job(job_id).await?;
        if transcript.status != TranscriptStatus::Transcribing {
            return Ok(transcript);
        }

        let provider_status = self.provider.job_status(job_id).await.map_err(|source| {
            TranscriptionServiceError::ProviderStatus {
                job_id: job_id.clone(),
                source,
            }
        })?;
        tracing::debug!(provider_status = %provider_status, "Provider job status");

        match provider_status {
            ProviderJobStatus::Completed => {
                self.transition(transcript, TranscriptStatus::Summarizing, None)
                    .await
            }
            ProviderJobStatus::Failed => {
                self.transition(transcript, TranscriptStatus::TranscriptionFailed, None)
                    .await
            }
            ProviderJobStatus::Queued | ProviderJobStatus::InProgress => Ok(transcript),
        }
    }

    async fn transition(
        &self,
        mut transcript: Transcript,
        next: TranscriptStatus,
        summary_location: Option<StorageLocation>,
    ) -> Result<Transcript, TranscriptionServiceError> {
        let current = transcript.status;
        if !current.can_transition_to(next) {
            return Err(TranscriptionServiceError::Conflicted {
                job_id: transcript.job_id,
                status: current,
                reason: "status transition not allowed",
            });
        }
        if summary_location.is_some() && next != TranscriptStatus::Done {
            return Err(TranscriptionServiceError::InvalidRequest {
                job_id: transcript.job_id,
                reason: "a summary location can only be recorded when moving to Done",
            });
        }

        self.repository
            .update_status(&transcript.job_id, current, next, summary_location.as_ref())
            .await
            .map_err(|source| TranscriptionServiceError::StatusUpdate {
                job_id: transcript.job_id.clone(),
                source,
            })?;

        tracing::debug!(from = %current, to = %next, "Job status transition");

        transcript.status = next;
        if let Some(location) = summary_location {
            transcript.summary_location = location;
        }
        transcript.updated_at = chrono::Utc::now();
        Ok(transcript)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("persisting transcript record: {0}")]
    Persist(#[source] RepositoryError),
    #[error("uploading audio for job {job_id}: {source}")]
    Upload {
        job_id: JobId,
        source: BlobStoreError,
    },
    #[error("starting provider job {job_id}: {source}")]
    StartJob {
        job_id: JobId,
        source: ProviderError,
    },
    #[error("looking up transcript: {0}")]
    Lookup(#[source] RepositoryError),
    #[error("downloading transcript for job {job_id}: {source}")]
    Download {
        job_id: JobId,
        source: BlobStoreError,
    },
    #[error("updating status of job {job_id}: {source}")]
    StatusUpdate {
        job_id: JobId,
        source: RepositoryError,
    },
    #[error("querying provider status of job {job_id}: {source}")]
    ProviderStatus {
        job_id: JobId,
        source: ProviderError,
    },
    #[error("job {job_id}: {reason}")]
    InvalidRequest {
        job_id: JobId,
        reason: &'static str,
    },
    #[error("job {job_id} is {status}: {reason}")]
    Conflicted {
        job_id: JobId,
        status: TranscriptStatus,
        reason: &'static str,
    },
}

impl TranscriptionServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Persist(e) | Self::Lookup(e) | Self::StatusUpdate { source: e, .. } => {
                match e {
                    RepositoryError::NotFound(_) => ErrorKind::NotFound,
                    RepositoryError::ConstraintViolation(_) => ErrorKind::AlreadyExists,
                    RepositoryError::ConcurrentModification(_) => ErrorKind::Conflicted,
                    _ => ErrorKind::Internal,
                }
            }
            Self::Upload { source, .. } | Self::Download { source, .. } => match source {
                BlobStoreError::NotFound(_) => ErrorKind::NotFound,
                BlobStoreError::Io(e) if e.kind() == io::ErrorKind::FileTooLarge => {
                    ErrorKind::TooLarge
                }
                _ => ErrorKind::Internal,
            },
            Self::StartJob { source, .. } | Self::ProviderStatus { source, .. } => match source {
                ProviderError::UnsupportedFormat(_) => ErrorKind::InvalidEntity,
                _ => ErrorKind::Internal,
            },
            Self::InvalidRequest { .. } => ErrorKind::InvalidEntity,
            Self::Conflicted { .. } => ErrorKind::Conflicted,
        }
    }
}
