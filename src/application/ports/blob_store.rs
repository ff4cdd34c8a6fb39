use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;
use tokio::io::AsyncWrite;

use crate::domain::StorageLocation;

#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Streams `stream` into `container` under `key`, returning the number of bytes stored.
    async fn upload(
        &self,
        container: &str,
        key: &StorageLocation,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError>;

    /// Copies the object at `key` into `sink`, returning the number of bytes written.
    async fn download(
        &self,
        container: &str,
        key: &StorageLocation,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("invalid container: {0}")]
    InvalidContainer(String),
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("store misconfigured: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
