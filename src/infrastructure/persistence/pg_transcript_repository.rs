use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{RepositoryError, TranscriptRepository};
use crate::domain::{AudioFormat, JobId, StorageLocation, Transcript, TranscriptStatus};

const SELECT_COLUMNS: &str = r#"
    SELECT job_id, audio_location, audio_format, transcript_location,
           summary_location, status, created_at, updated_at
    FROM session_transcripts
"#;

pub struct PgTranscriptRepository {
    pool: PgPool,
}

impl PgTranscriptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TranscriptRow {
    job_id: String,
    audio_location: String,
    audio_format: String,
    transcript_location: String,
    summary_location: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TranscriptRow> for Transcript {
    type Error = RepositoryError;

    fn try_from(r: TranscriptRow) -> Result<Self, Self::Error> {
        let audio_format = r
            .audio_format
            .parse::<AudioFormat>()
            .map_err(|e| RepositoryError::InvalidRecord(e.to_string()))?;
        let status = r
            .status
            .parse::<TranscriptStatus>()
            .map_err(|e| RepositoryError::InvalidRecord(e.to_string()))?;

        Ok(Transcript {
            job_id: JobId::from_raw(r.job_id),
            audio_location: StorageLocation::from_raw(r.audio_location),
            audio_format,
            transcript_location: StorageLocation::from_raw(r.transcript_location),
            summary_location: StorageLocation::from_raw(r.summary_location),
            status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::ConstraintViolation(db.message().to_string())
        }
        _ => RepositoryError::QueryFailed(e.to_string()),
    }
}

#[async_trait]
impl TranscriptRepository for PgTranscriptRepository {
    #[instrument(skip(self, transcript), fields(job_id = %transcript.job_id))]
    async fn add_to_session(
        &self,
        session_id: &str,
        transcript: &Transcript,
    ) -> Result<Transcript, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO session_transcripts
                (job_id, session_id, audio_location, audio_format, transcript_location,
                 summary_location, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(transcript.job_id.as_str())
        .bind(session_id)
        .bind(transcript.audio_location.as_str())
        .bind(transcript.audio_format.as_str())
        .bind(transcript.transcript_location.as_str())
        .bind(transcript.summary_location.as_str())
        .bind(transcript.status.as_str())
        .bind(transcript.created_at)
        .bind(transcript.updated_at)
        .execute(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(transcript.clone())
    }

    #[instrument(skip(self), fields(job_id = %job_id))]
    async fn get(&self, job_id: &JobId) -> Result<Transcript, RepositoryError> {
        let row =
            sqlx::query_as::<_, TranscriptRow>(&format!("{SELECT_COLUMNS} WHERE job_id = $1"))
                .bind(job_id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(query_error)?;

        match row {
            Some(r) => r.try_into(),
            None => Err(RepositoryError::NotFound(format!("transcript {}", job_id))),
        }
    }

    #[instrument(skip(self))]
    async fn list_for_session(&self, session_id: &str) -> Result<Vec<Transcript>, RepositoryError> {
        let rows = sqlx::query_as::<_, TranscriptRow>(&format!(
            "{SELECT_COLUMNS} WHERE session_id = $1 ORDER BY created_at ASC"
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        rows.into_iter().map(Transcript::try_from).collect()
    }

    #[instrument(skip(self, summary_location), fields(job_id = %job_id, status = %status))]
    async fn update_status(
        &self,
        job_id: &JobId,
        expected: TranscriptStatus,
        status: TranscriptStatus,
        summary_location: Option<&StorageLocation>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE session_transcripts
            SET status = $1,
                summary_location = COALESCE($2, summary_location),
                updated_at = $3
            WHERE job_id = $4 AND status = $5
            "#,
        )
        .bind(status.as_str())
        .bind(summary_location.map(StorageLocation::as_str))
        .bind(Utc::now())
        .bind(job_id.as_str())
        .bind(expected.as_str())
        .execute(&self.pool)
        .await
        .map_err(query_error)?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        let current: Option<String> =
            sqlx::query_scalar("SELECT status FROM session_transcripts WHERE job_id = $1")
                .bind(job_id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(query_error)?;

        match current {
            Some(current) => Err(RepositoryError::ConcurrentModification(format!(
                "transcript {} is {}, expected {}",
                job_id, current, expected
            ))),
            None => Err(RepositoryError::NotFound(format!("transcript {}", job_id))),
        }
    }
}
