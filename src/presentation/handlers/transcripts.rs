use std::error::Error as StdError;
use std::io;

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use futures::{StreamExt, TryStreamExt};
use http_body_util::LengthLimitError;
use serde::{Deserialize, Serialize};

use crate::domain::{JobId, SessionScope, StorageLocation, Transcript, TranscriptStatus};
use crate::presentation::state::AppState;

use super::api_error::ApiError;
use super::audio_content_type::audio_format_from_content_type;

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub id: String,
    pub status: String,
    pub audio_format: String,
    pub summary_available: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Transcript> for TranscriptResponse {
    fn from(transcript: &Transcript) -> Self {
        Self {
            id: transcript.job_id.to_string(),
            status: transcript.status.to_string(),
            audio_format: transcript.audio_format.to_string(),
            summary_available: !transcript.summary_location.is_empty(),
            created_at: transcript.created_at.to_rfc3339(),
            updated_at: transcript.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    pub summary_location: Option<String>,
}

type SessionParams = (String, String, String);
type TranscriptParams = (String, String, String, String);

/// Accepts the raw recording as the request body; the format comes from `Content-Type`.
#[tracing::instrument(skip(state, headers, body))]
pub async fn submit_transcript_handler(
    State(state): State<AppState>,
    Path((user_id, campaign_id, session_id)): Path<SessionParams>,
    headers: HeaderMap,
    body: Body,
) -> Result<impl IntoResponse, ApiError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let audio_format = audio_format_from_content_type(content_type)
        .ok_or_else(|| ApiError::UnsupportedContentType(content_type.to_string()))?;

    let scope = SessionScope::new(user_id, campaign_id, session_id)?;
    let audio = body.into_data_stream().map_err(body_error).boxed();

    let transcript = state
        .transcription_service
        .submit_job(&scope, audio_format, audio)
        .await?;

    Ok((StatusCode::CREATED, Json(TranscriptResponse::from(&transcript))))
}

/// Chunked uploads only hit the size limit mid-stream; keep that distinguishable
/// from a dropped connection.
fn body_error(error: axum::Error) -> io::Error {
    if exceeds_length_limit(&error) {
        io::Error::new(io::ErrorKind::FileTooLarge, error)
    } else {
        io::Error::other(error)
    }
}

fn exceeds_length_limit(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(e) = current {
        if e.is::<LengthLimitError>() {
            return true;
        }
        current = e.source();
    }
    false
}

#[tracing::instrument(skip(state))]
pub async fn list_transcripts_handler(
    State(state): State<AppState>,
    Path((_user_id, _campaign_id, session_id)): Path<SessionParams>,
) -> Result<impl IntoResponse, ApiError> {
    let transcripts = state
        .transcription_service
        .list_for_session(&session_id)
        .await?;

    let response: Vec<TranscriptResponse> =
        transcripts.iter().map(TranscriptResponse::from).collect();
    Ok(Json(response))
}

#[tracing::instrument(skip(state))]
pub async fn get_transcript_handler(
    State(state): State<AppState>,
    Path((_user_id, _campaign_id, _session_id, job_id)): Path<TranscriptParams>,
) -> Result<impl IntoResponse, ApiError> {
    let transcript = state
        .transcription_service
        .get_job(&JobId::from_raw(job_id))
        .await?;

    Ok(Json(TranscriptResponse::from(&transcript)))
}

#[tracing::instrument(skip(state))]
pub async fn download_transcript_handler(
    State(state): State<AppState>,
    Path((_user_id, _campaign_id, _session_id, job_id)): Path<TranscriptParams>,
) -> Result<impl IntoResponse, ApiError> {
    let mut text: Vec<u8> = Vec::new();
    let written = state
        .transcription_service
        .download_transcript(&JobId::from_raw(job_id), &mut text)
        .await?;
    tracing::debug!(bytes = written, "Transcript downloaded");

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

/// Entry point for whatever drives jobs forward once the provider reports progress.
#[tracing::instrument(skip(state, request))]
pub async fn update_status_handler(
    State(state): State<AppState>,
    Path((_user_id, _campaign_id, _session_id, job_id)): Path<TranscriptParams>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let next = request.status.parse::<TranscriptStatus>()?;
    let summary_location = request
        .summary_location
        .filter(|location| !location.is_empty())
        .map(StorageLocation::from_raw);

    let transcript = state
        .transcription_service
        .advance_status(&JobId::from_raw(job_id), next, summary_location)
        .await?;

    Ok(Json(TranscriptResponse::from(&transcript)))
}

#[tracing::instrument(skip(state))]
pub async fn refresh_transcript_handler(
    State(state): State<AppState>,
    Path((_user_id, _campaign_id, _session_id, job_id)): Path<TranscriptParams>,
) -> Result<impl IntoResponse, ApiError> {
    let transcript = state
        .transcription_service
        .refresh_from_provider(&JobId::from_raw(job_id))
        .await?;

    Ok(Json(TranscriptResponse::from(&transcript)))
}
