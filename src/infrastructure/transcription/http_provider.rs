use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ProviderError, ProviderJobStatus, TranscriptionProvider};
use crate::domain::{AudioFormat, JobId, StorageLocation};

/// Client for a batch speech-to-text service exposing asynchronous jobs over
/// JSON: `POST /jobs` to start one and `GET /jobs/{name}` to poll it. The
/// service reads audio from and writes transcripts to the configured bucket.
pub struct HttpTranscriptionProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    bucket: String,
    media_uri_scheme: String,
    language_code: String,
}

impl HttpTranscriptionProvider {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        bucket: &str,
        media_uri_scheme: &str,
        language_code: &str,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            bucket: bucket.to_string(),
            media_uri_scheme: media_uri_scheme.to_string(),
            language_code: language_code.to_string(),
        }
    }

    fn media_uri(&self, source: &StorageLocation) -> String {
        format!("{}://{}/{}", self.media_uri_scheme, self.bucket, source)
    }

    /// `{base_url}/{segments...}`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, ProviderError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ProviderError::ApiRequestFailed(format!("base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|()| {
                ProviderError::ApiRequestFailed(format!("base url {} has no path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

fn media_format(format: AudioFormat) -> &'static str {
    match format {
        AudioFormat::Mp3 => "mp3",
        AudioFormat::Mp4 => "mp4",
        AudioFormat::Wav => "wav",
        AudioFormat::Flac => "flac",
        AudioFormat::Amr => "amr",
        AudioFormat::Ogg => "ogg",
        AudioFormat::WebM => "webm",
    }
}

#[derive(Serialize)]
struct StartJobRequest<'a> {
    job_name: &'a str,
    media_uri: String,
    media_format: &'static str,
    language_code: &'a str,
    output_bucket: &'a str,
    output_key: &'a str,
}

#[derive(Deserialize)]
struct JobStatusResponse {
    status: String,
}

#[async_trait]
impl TranscriptionProvider for HttpTranscriptionProvider {
    #[tracing::instrument(skip(self), fields(job_id = %job_id))]
    async fn start_job(
        &self,
        job_id: &JobId,
        source: &StorageLocation,
        destination: &StorageLocation,
        audio_format: AudioFormat,
    ) -> Result<(), ProviderError> {
        let body = StartJobRequest {
            job_name: job_id.as_str(),
            media_uri: self.media_uri(source),
            media_format: media_format(audio_format),
            language_code: &self.language_code,
            output_bucket: &self.bucket,
            output_key: destination.as_str(),
        };
        let endpoint = self.endpoint(&["jobs"])?;

        tracing::debug!(endpoint = %endpoint, media_uri = %body.media_uri, "Starting transcription job");

        let response = self
            .authorize(self.client.post(endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Transcription job accepted by provider");
            return Ok(());
        }

        let detail = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        let message = format!("status {}: {}", status, detail);

        Err(match status {
            StatusCode::UNSUPPORTED_MEDIA_TYPE | StatusCode::UNPROCESSABLE_ENTITY => {
                ProviderError::UnsupportedFormat(message)
            }
            s if s.is_client_error() => ProviderError::Rejected(message),
            _ => ProviderError::ApiRequestFailed(message),
        })
    }

    #[tracing::instrument(skip(self), fields(job_id = %job_id))]
    async fn job_status(&self, job_id: &JobId) -> Result<ProviderJobStatus, ProviderError> {
        let endpoint = self.endpoint(&["jobs", job_id.as_str()])?;

        let response = self
            .authorize(self.client.get(endpoint))
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::ApiRequestFailed(format!(
                "status {}: {}",
                status, detail
            )));
        }

        let result: JobStatusResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("parse response: {}", e)))?;

        result
            .status
            .parse::<ProviderJobStatus>()
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}
