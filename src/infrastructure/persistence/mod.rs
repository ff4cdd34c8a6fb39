mod memory_transcript_repository;
mod pg_pool;
mod pg_transcript_repository;

pub use memory_transcript_repository::InMemoryTranscriptRepository;
pub use pg_pool::{create_pool, run_migrations};
pub use pg_transcript_repository::PgTranscriptRepository;
