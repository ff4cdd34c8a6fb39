use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ProviderError, ProviderJobStatus, TranscriptionProvider};
use crate::domain::{AudioFormat, JobId, StorageLocation};

/// Accepts every job without doing any work and reports it as completed.
/// Lets the service run end to end without a speech-to-text backend.
#[derive(Default)]
pub struct ScaffoldTranscriptionProvider {
    started: RwLock<HashSet<JobId>>,
}

impl ScaffoldTranscriptionProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranscriptionProvider for ScaffoldTranscriptionProvider {
    async fn start_job(
        &self,
        job_id: &JobId,
        source: &StorageLocation,
        destination: &StorageLocation,
        audio_format: AudioFormat,
    ) -> Result<(), ProviderError> {
        tracing::info!(
            job_id = %job_id,
            source = %source,
            destination = %destination,
            audio_format = %audio_format,
            "Scaffold provider accepted job"
        );
        self.started.write().await.insert(job_id.clone());
        Ok(())
    }

    async fn job_status(&self, job_id: &JobId) -> Result<ProviderJobStatus, ProviderError> {
        if self.started.read().await.contains(job_id) {
            Ok(ProviderJobStatus::Completed)
        } else {
            Err(ProviderError::ApiRequestFailed(format!("unknown job {}", job_id)))
        }
    }
}
