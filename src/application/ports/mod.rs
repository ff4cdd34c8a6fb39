mod blob_store;
mod id_generator;
mod repository_error;
mod transcript_repository;
mod transcription_provider;

pub use blob_store::{BlobStore, BlobStoreError};
pub use id_generator::IdGenerator;
pub use repository_error::RepositoryError;
pub use transcript_repository::TranscriptRepository;
pub use transcription_provider::{ProviderError, ProviderJobStatus, TranscriptionProvider};
