use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use tokio::io::AsyncWrite;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StorageLocation;

use super::object_transfer::{copy_into, prefixed_path, put_stream};

/// Containers are directories under `base_path`.
pub struct LocalBlobStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalBlobStore {
    pub fn new(base_path: PathBuf) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_path).map_err(BlobStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl BlobStore for LocalBlobStore {
    #[tracing::instrument(skip(self, stream), fields(key = %key))]
    async fn upload(
        &self,
        container: &str,
        key: &StorageLocation,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError> {
        let path = prefixed_path(container, key)?;
        put_stream(self.inner.as_ref(), &path, stream).await
    }

    #[tracing::instrument(skip(self, sink), fields(key = %key))]
    async fn download(
        &self,
        container: &str,
        key: &StorageLocation,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, BlobStoreError> {
        let path = prefixed_path(container, key)?;
        copy_into(self.inner.as_ref(), &path, sink).await
    }
}
