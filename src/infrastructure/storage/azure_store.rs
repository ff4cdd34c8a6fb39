use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use object_store::azure::MicrosoftAzureBuilder;
use tokio::io::AsyncWrite;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StorageLocation;

use super::container_clients::ContainerClients;
use super::object_transfer::{copy_into, object_path, put_stream};

pub struct AzureBlobStore {
    containers: ContainerClients,
}

impl AzureBlobStore {
    pub fn new(account: &str, access_key: &str) -> Self {
        let account = account.to_string();
        let access_key = access_key.to_string();
        let containers = ContainerClients::new(move |container| {
            let store = MicrosoftAzureBuilder::new()
                .with_account(&account)
                .with_access_key(&access_key)
                .with_container_name(container)
                .build()?;
            Ok(Arc::new(store))
        });
        Self { containers }
    }
}

#[async_trait::async_trait]
impl BlobStore for AzureBlobStore {
    #[tracing::instrument(skip(self, stream), fields(key = %key))]
    async fn upload(
        &self,
        container: &str,
        key: &StorageLocation,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError> {
        let client = self.containers.get(container).await?;
        let path = object_path(key.as_str())?;
        put_stream(client.as_ref(), &path, stream).await
    }

    #[tracing::instrument(skip(self, sink), fields(key = %key))]
    async fn download(
        &self,
        container: &str,
        key: &StorageLocation,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, BlobStoreError> {
        let client = self.containers.get(container).await?;
        let path = object_path(key.as_str())?;
        copy_into(client.as_ref(), &path, sink).await
    }
}
