use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    download_transcript_handler, get_transcript_handler, health_handler,
    list_transcripts_handler, refresh_transcript_handler, submit_transcript_handler,
    update_status_handler,
};
use crate::presentation::state::AppState;

const SESSION_TRANSCRIPTS: &str =
    "/api/v1/users/{user_id}/campaigns/{campaign_id}/sessions/{session_id}/transcripts";

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = RequestBodyLimitLayer::new(state.max_upload_bytes);
    let request_timeout = TimeoutLayer::new(state.request_timeout);

    let transcript = format!("{SESSION_TRANSCRIPTS}/{{job_id}}");

    let uploads = Router::new()
        .route(
            SESSION_TRANSCRIPTS,
            post(submit_transcript_handler).get(list_transcripts_handler),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(upload_limit);

    Router::new()
        .route("/health", get(health_handler))
        .merge(uploads)
        .route(&transcript, get(get_transcript_handler))
        .route(
            &format!("{transcript}/fulltext"),
            get(download_transcript_handler),
        )
        .route(&format!("{transcript}/status"), put(update_status_handler))
        .route(&format!("{transcript}/refresh"), post(refresh_transcript_handler))
        .layer(request_timeout)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
