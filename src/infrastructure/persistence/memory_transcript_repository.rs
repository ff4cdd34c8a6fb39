use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, TranscriptRepository};
use crate::domain::{JobId, StorageLocation, Transcript, TranscriptStatus};

struct StoredTranscript {
    session_id: String,
    transcript: Transcript,
}

/// Non-durable repository for scaffold runs and tests.
#[derive(Default)]
pub struct InMemoryTranscriptRepository {
    records: RwLock<HashMap<JobId, StoredTranscript>>,
}

impl InMemoryTranscriptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranscriptRepository for InMemoryTranscriptRepository {
    async fn add_to_session(
        &self,
        session_id: &str,
        transcript: &Transcript,
    ) -> Result<Transcript, RepositoryError> {
        let mut records = self.records.write().await;
        if records.contains_key(&transcript.job_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "transcript {} already exists",
                transcript.job_id
            )));
        }
        records.insert(
            transcript.job_id.clone(),
            StoredTranscript {
                session_id: session_id.to_string(),
                transcript: transcript.clone(),
            },
        );
        Ok(transcript.clone())
    }

    async fn get(&self, job_id: &JobId) -> Result<Transcript, RepositoryError> {
        self.records
            .read()
            .await
            .get(job_id)
            .map(|stored| stored.transcript.clone())
            .ok_or_else(|| RepositoryError::NotFound(format!("transcript {}", job_id)))
    }

    async fn list_for_session(&self, session_id: &str) -> Result<Vec<Transcript>, RepositoryError> {
        let records = self.records.read().await;
        let mut transcripts: Vec<Transcript> = records
            .values()
            .filter(|stored| stored.session_id == session_id)
            .map(|stored| stored.transcript.clone())
            .collect();
        transcripts.sort_by_key(|t| t.created_at);
        Ok(transcripts)
    }

    async fn update_status(
        &self,
        job_id: &JobId,
        expected: TranscriptStatus,
        status: TranscriptStatus,
        summary_location: Option<&StorageLocation>,
    ) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        let stored = records
            .get_mut(job_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("transcript {}", job_id)))?;

        if stored.transcript.status != expected {
            return Err(RepositoryError::ConcurrentModification(format!(
                "transcript {} is {}, expected {}",
                job_id, stored.transcript.status, expected
            )));
        }

        stored.transcript.status = status;
        if let Some(location) = summary_location {
            stored.transcript.summary_location = location.clone();
        }
        stored.transcript.updated_at = Utc::now();
        Ok(())
    }
}
