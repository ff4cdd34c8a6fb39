use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use campaign_scribe::application::ports::TranscriptRepository;
use campaign_scribe::application::services::TranscriptionService;
use campaign_scribe::infrastructure::id::UuidGenerator;
use campaign_scribe::infrastructure::observability::init_tracing;
use campaign_scribe::infrastructure::persistence::{
    InMemoryTranscriptRepository, PgTranscriptRepository, create_pool, run_migrations,
};
use campaign_scribe::infrastructure::storage::BlobStoreFactory;
use campaign_scribe::infrastructure::transcription::TranscriptionProviderFactory;
use campaign_scribe::presentation::config::DatabaseSettings;
use campaign_scribe::presentation::{AppState, Environment, create_router, load_settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = load_settings(environment).context("loading settings")?;

    init_tracing(&settings.logging, environment);

    let repository = create_repository(&settings.database).await?;
    let blob_store =
        BlobStoreFactory::create(&settings.storage).context("creating blob store")?;
    let provider =
        TranscriptionProviderFactory::create(&settings.transcription, &settings.storage.container)
            .context("creating transcription provider")?;

    let transcription_service = Arc::new(TranscriptionService::new(
        settings.storage.container.clone(),
        repository,
        blob_store,
        provider,
        Arc::new(UuidGenerator),
    ));

    let state = AppState::new(
        transcription_service,
        settings.server.request_timeout(),
        settings.server.max_upload_bytes(),
    );
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("parsing server address")?;
    tracing::info!(
        %addr,
        storage = ?settings.storage.provider,
        transcription = ?settings.transcription.provider,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn create_repository(
    settings: &DatabaseSettings,
) -> anyhow::Result<Arc<dyn TranscriptRepository>> {
    match &settings.url {
        Some(url) => {
            let pool = create_pool(url, settings.max_connections).await?;
            run_migrations(&pool).await?;
            Ok(Arc::new(PgTranscriptRepository::new(pool)))
        }
        None => {
            tracing::warn!("No database url configured, transcripts are kept in memory");
            Ok(Arc::new(InMemoryTranscriptRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
