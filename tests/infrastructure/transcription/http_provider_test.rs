use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use campaign_scribe::application::ports::{ProviderError, ProviderJobStatus, TranscriptionProvider};
use campaign_scribe::domain::{AudioFormat, JobId, StorageLocation};
use campaign_scribe::infrastructure::transcription::HttpTranscriptionProvider;

#[derive(Clone, Default)]
struct Recorded {
    bodies: Arc<Mutex<Vec<Value>>>,
    authorization: Arc<Mutex<Option<String>>>,
    polled: Arc<Mutex<Vec<String>>>,
}

/// Serves the provider's job API, answering job creation with `start_status`
/// and every status poll with `job_status`.
async fn spawn_provider(start_status: StatusCode, job_status: &'static str) -> (String, Recorded) {
    let recorded = Recorded::default();

    let app = Router::new()
        .route(
            "/jobs",
            post(
                move |State(recorded): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    recorded.bodies.lock().unwrap().push(body);
                    *recorded.authorization.lock().unwrap() = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    (start_status, "provider says no")
                },
            ),
        )
        .route(
            "/jobs/{job_name}",
            get(move |State(recorded): State<Recorded>, Path(job_name): Path<String>| async move {
                recorded.polled.lock().unwrap().push(job_name.clone());
                if job_name == "missing" {
                    return (StatusCode::NOT_FOUND, Json(json!({"error": "no such job"})));
                }
                (StatusCode::OK, Json(json!({"status": job_status})))
            }),
        )
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), recorded)
}

fn provider(base_url: &str, api_key: Option<&str>) -> HttpTranscriptionProvider {
    HttpTranscriptionProvider::new(
        base_url,
        api_key.map(String::from),
        "campaign-audio",
        "s3",
        "en-US",
    )
}

async fn start(provider: &HttpTranscriptionProvider) -> Result<(), ProviderError> {
    provider
        .start_job(
            &JobId::from_raw("session0-abc"),
            &StorageLocation::from_raw("u/c/session0/audio-1"),
            &StorageLocation::from_raw("u/c/session0/transcript-2"),
            AudioFormat::WebM,
        )
        .await
}

#[tokio::test]
async fn given_accepting_provider_when_starting_job_then_sends_job_description() {
    let (base_url, recorded) = spawn_provider(StatusCode::CREATED, "QUEUED").await;

    start(&provider(&base_url, None)).await.unwrap();

    let bodies = recorded.bodies.lock().unwrap();
    assert_eq!(
        bodies[0],
        json!({
            "job_name": "session0-abc",
            "media_uri": "s3://campaign-audio/u/c/session0/audio-1",
            "media_format": "webm",
            "language_code": "en-US",
            "output_bucket": "campaign-audio",
            "output_key": "u/c/session0/transcript-2",
        })
    );
    assert!(recorded.authorization.lock().unwrap().is_none());
}

#[tokio::test]
async fn given_api_key_when_starting_job_then_sends_bearer_token() {
    let (base_url, recorded) = spawn_provider(StatusCode::OK, "QUEUED").await;

    start(&provider(&base_url, Some("secret"))).await.unwrap();

    assert_eq!(
        recorded.authorization.lock().unwrap().as_deref(),
        Some("Bearer secret")
    );
}

#[tokio::test]
async fn given_trailing_slash_in_base_url_when_starting_job_then_still_reaches_jobs_endpoint() {
    let (base_url, recorded) = spawn_provider(StatusCode::OK, "QUEUED").await;

    start(&provider(&format!("{base_url}/"), None)).await.unwrap();

    assert_eq!(recorded.bodies.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn given_unsupported_media_response_when_starting_job_then_unsupported_format() {
    let (base_url, _) = spawn_provider(StatusCode::UNSUPPORTED_MEDIA_TYPE, "QUEUED").await;

    let err = start(&provider(&base_url, None)).await.unwrap_err();

    assert!(matches!(err, ProviderError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn given_client_error_response_when_starting_job_then_rejected() {
    let (base_url, _) = spawn_provider(StatusCode::CONFLICT, "QUEUED").await;

    let err = start(&provider(&base_url, None)).await.unwrap_err();

    assert!(matches!(err, ProviderError::Rejected(msg) if msg.contains("provider says no")));
}

#[tokio::test]
async fn given_server_error_response_when_starting_job_then_api_request_failed() {
    let (base_url, _) = spawn_provider(StatusCode::SERVICE_UNAVAILABLE, "QUEUED").await;

    let err = start(&provider(&base_url, None)).await.unwrap_err();

    assert!(matches!(err, ProviderError::ApiRequestFailed(_)));
}

#[tokio::test]
async fn given_unreachable_provider_when_starting_job_then_api_request_failed() {
    let err = start(&provider("http://127.0.0.1:1", None)).await.unwrap_err();

    assert!(matches!(err, ProviderError::ApiRequestFailed(_)));
}

#[tokio::test]
async fn given_known_job_when_polling_then_parses_status() {
    let (base_url, _) = spawn_provider(StatusCode::OK, "IN_PROGRESS").await;

    let status = provider(&base_url, None)
        .job_status(&JobId::from_raw("session0-abc"))
        .await
        .unwrap();

    assert_eq!(status, ProviderJobStatus::InProgress);
}

#[tokio::test]
async fn given_unrecognised_status_when_polling_then_invalid_response() {
    let (base_url, _) = spawn_provider(StatusCode::OK, "EXPLODED").await;

    let err = provider(&base_url, None)
        .job_status(&JobId::from_raw("session0-abc"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn given_unknown_job_when_polling_then_api_request_failed() {
    let (base_url, _) = spawn_provider(StatusCode::OK, "COMPLETED").await;

    let err = provider(&base_url, None)
        .job_status(&JobId::from_raw("missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::ApiRequestFailed(_)));
}

#[tokio::test]
async fn given_job_name_with_reserved_characters_when_polling_then_sent_as_one_segment() {
    let (base_url, recorded) = spawn_provider(StatusCode::OK, "QUEUED").await;

    let status = provider(&base_url, None)
        .job_status(&JobId::from_raw("session 0?x#y-abc"))
        .await
        .unwrap();

    assert_eq!(status, ProviderJobStatus::Queued);
    assert_eq!(
        recorded.polled.lock().unwrap().as_slice(),
        ["session 0?x#y-abc".to_string()]
    );
}
