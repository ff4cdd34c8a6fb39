pub mod id;
pub mod observability;
pub mod persistence;
pub mod storage;
pub mod transcription;
