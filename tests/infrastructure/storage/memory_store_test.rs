use bytes::Bytes;
use futures::stream::{self, StreamExt};

use campaign_scribe::application::ports::{BlobStore, BlobStoreError};
use campaign_scribe::domain::StorageLocation;
use campaign_scribe::infrastructure::storage::InMemoryBlobStore;

#[tokio::test]
async fn given_object_in_one_container_when_downloading_from_another_then_not_found() {
    let store = InMemoryBlobStore::new();
    let key = StorageLocation::from_raw("u/c/s/audio-1");
    store
        .upload("bucket-a", &key, stream::iter(vec![Ok(Bytes::from("a"))]).boxed())
        .await
        .unwrap();

    let mut sink: Vec<u8> = Vec::new();
    let err = store.download("bucket-b", &key, &mut sink).await.unwrap_err();

    assert!(matches!(err, BlobStoreError::NotFound(_)));
}

#[tokio::test]
async fn given_overwritten_key_when_downloading_then_returns_latest_content() {
    let store = InMemoryBlobStore::new();
    let key = StorageLocation::from_raw("u/c/s/transcript-1");
    for content in ["first", "second"] {
        store
            .upload("bucket", &key, stream::iter(vec![Ok(Bytes::from(content))]).boxed())
            .await
            .unwrap();
    }

    let mut sink: Vec<u8> = Vec::new();
    store.download("bucket", &key, &mut sink).await.unwrap();

    assert_eq!(sink, b"second");
}
