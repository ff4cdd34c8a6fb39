use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use object_store::aws::AmazonS3Builder;
use tokio::io::AsyncWrite;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StorageLocation;

use super::container_clients::ContainerClients;
use super::object_transfer::{copy_into, object_path, put_stream};

/// Containers are S3 buckets. Credentials come from the standard `AWS_*`
/// environment variables.
pub struct S3BlobStore {
    buckets: ContainerClients,
}

impl S3BlobStore {
    pub fn new(region: Option<String>) -> Self {
        let buckets = ContainerClients::new(move |bucket| {
            let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
            if let Some(region) = &region {
                builder = builder.with_region(region);
            }
            Ok(Arc::new(builder.build()?))
        });
        Self { buckets }
    }
}

#[async_trait::async_trait]
impl BlobStore for S3BlobStore {
    #[tracing::instrument(skip(self, stream), fields(key = %key))]
    async fn upload(
        &self,
        container: &str,
        key: &StorageLocation,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError> {
        let bucket = self.buckets.get(container).await?;
        let path = object_path(key.as_str())?;
        put_stream(bucket.as_ref(), &path, stream).await
    }

    #[tracing::instrument(skip(self, sink), fields(key = %key))]
    async fn download(
        &self,
        container: &str,
        key: &StorageLocation,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, BlobStoreError> {
        let bucket = self.buckets.get(container).await?;
        let path = object_path(key.as_str())?;
        copy_into(bucket.as_ref(), &path, sink).await
    }
}
