use std::io;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, WriteMultipart};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::application::ports::BlobStoreError;
use crate::domain::StorageLocation;

const MAX_IN_FLIGHT_PARTS: usize = 8;

/// Path of `key` inside a store rooted above all containers.
pub(super) fn prefixed_path(
    container: &str,
    key: &StorageLocation,
) -> Result<StorePath, BlobStoreError> {
    validate_container(container)?;
    let key = object_path(key.as_str())?;
    object_path(&format!("{}/{}", container, key))
}

/// Path of `key` inside a store already bound to one container.
pub(super) fn object_path(key: &str) -> Result<StorePath, BlobStoreError> {
    let path = StorePath::parse(key).map_err(|e| BlobStoreError::InvalidKey(e.to_string()))?;
    if path.as_ref().is_empty() {
        return Err(BlobStoreError::InvalidKey(format!("empty key {:?}", key)));
    }
    Ok(path)
}

pub(super) fn validate_container(container: &str) -> Result<(), BlobStoreError> {
    if container.is_empty() || container.contains('/') || container == "." || container == ".." {
        return Err(BlobStoreError::InvalidContainer(container.to_string()));
    }
    Ok(())
}

pub(super) async fn put_stream(
    store: &dyn ObjectStore,
    path: &StorePath,
    mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
) -> Result<u64, BlobStoreError> {
    let upload = store
        .put_multipart(path)
        .await
        .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;
    let mut writer = WriteMultipart::new(upload);

    let mut total_bytes: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let bytes = match chunk {
            Ok(b) => b,
            Err(e) => {
                let _ = writer.abort().await;
                return Err(BlobStoreError::Io(e));
            }
        };
        if let Err(e) = writer.wait_for_capacity(MAX_IN_FLIGHT_PARTS).await {
            let _ = writer.abort().await;
            return Err(BlobStoreError::UploadFailed(e.to_string()));
        }
        total_bytes += bytes.len() as u64;
        writer.put(bytes);
    }

    writer
        .finish()
        .await
        .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

    Ok(total_bytes)
}

pub(super) async fn copy_into(
    store: &dyn ObjectStore,
    path: &StorePath,
    sink: &mut (dyn AsyncWrite + Unpin + Send),
) -> Result<u64, BlobStoreError> {
    let result = match store.get(path).await {
        Ok(r) => r,
        Err(object_store::Error::NotFound { .. }) => {
            return Err(BlobStoreError::NotFound(path.to_string()));
        }
        Err(e) => return Err(BlobStoreError::DownloadFailed(e.to_string())),
    };

    let mut stream = result.into_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;
        sink.write_all(&bytes).await?;
        written += bytes.len() as u64;
    }
    sink.flush().await?;

    Ok(written)
}
