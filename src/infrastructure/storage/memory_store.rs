use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;
use object_store::memory::InMemory;
use tokio::io::AsyncWrite;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StorageLocation;

use super::object_transfer::{copy_into, prefixed_path, put_stream};

/// Process-local store for scaffold runs and tests. Contents are lost on exit.
pub struct InMemoryBlobStore {
    inner: InMemory,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self {
            inner: InMemory::new(),
        }
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn upload(
        &self,
        container: &str,
        key: &StorageLocation,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError> {
        let path = prefixed_path(container, key)?;
        put_stream(&self.inner, &path, stream).await
    }

    async fn download(
        &self,
        container: &str,
        key: &StorageLocation,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, BlobStoreError> {
        let path = prefixed_path(container, key)?;
        copy_into(&self.inner, &path, sink).await
    }
}
