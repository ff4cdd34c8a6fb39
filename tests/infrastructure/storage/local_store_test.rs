use std::io;

use bytes::Bytes;
use futures::stream::{self, StreamExt};

use campaign_scribe::application::ports::{BlobStore, BlobStoreError};
use campaign_scribe::domain::StorageLocation;
use campaign_scribe::infrastructure::storage::LocalBlobStore;

const CONTAINER: &str = "campaign-audio";

fn create_test_store() -> (tempfile::TempDir, LocalBlobStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalBlobStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_chunked_stream_when_uploading_then_returns_total_size() {
    let (_dir, store) = create_test_store();
    let key = StorageLocation::from_raw("u/c/s/audio-1");
    let chunks = vec![Ok(Bytes::from("hello ")), Ok(Bytes::from("world"))];

    let size = store
        .upload(CONTAINER, &key, stream::iter(chunks).boxed())
        .await
        .unwrap();

    assert_eq!(size, 11);
}

#[tokio::test]
async fn given_uploaded_object_when_downloading_then_bytes_match_original() {
    let (dir, store) = create_test_store();
    let key = StorageLocation::from_raw("u/c/s/transcript-1");
    let chunks = vec![Ok(Bytes::from_static(b"this is a test"))];
    store
        .upload(CONTAINER, &key, stream::iter(chunks).boxed())
        .await
        .unwrap();

    let mut sink: Vec<u8> = Vec::new();
    let written = store.download(CONTAINER, &key, &mut sink).await.unwrap();

    assert_eq!(written, 14);
    assert_eq!(sink, b"this is a test");
    assert!(dir.path().join(CONTAINER).join("u/c/s/transcript-1").exists());
}

#[tokio::test]
async fn given_missing_object_when_downloading_then_not_found() {
    let (_dir, store) = create_test_store();
    let mut sink: Vec<u8> = Vec::new();

    let err = store
        .download(CONTAINER, &StorageLocation::from_raw("nope"), &mut sink)
        .await
        .unwrap_err();

    assert!(matches!(err, BlobStoreError::NotFound(_)));
}

#[tokio::test]
async fn given_failing_stream_when_uploading_then_returns_io_error() {
    let (_dir, store) = create_test_store();
    let chunks = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away")),
    ];

    let err = store
        .upload(
            CONTAINER,
            &StorageLocation::from_raw("u/c/s/audio-2"),
            stream::iter(chunks).boxed(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, BlobStoreError::Io(_)));
}

#[tokio::test]
async fn given_invalid_container_when_uploading_then_rejected() {
    let (_dir, store) = create_test_store();

    for container in ["", "..", "a/b"] {
        let err = store
            .upload(
                container,
                &StorageLocation::from_raw("key"),
                stream::iter(vec![Ok(Bytes::from("x"))]).boxed(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, BlobStoreError::InvalidContainer(_)), "{container:?}");
    }
}

#[tokio::test]
async fn given_empty_key_when_uploading_then_invalid_key() {
    let (_dir, store) = create_test_store();

    let err = store
        .upload(
            CONTAINER,
            &StorageLocation::empty(),
            stream::iter(vec![Ok(Bytes::from("x"))]).boxed(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, BlobStoreError::InvalidKey(_)));
}

#[tokio::test]
async fn given_rejected_root_key_when_uploading_later_objects_then_container_still_usable() {
    let (_dir, store) = create_test_store();
    for root_key in ["", "/"] {
        let err = store
            .upload(
                CONTAINER,
                &StorageLocation::from_raw(root_key),
                stream::iter(vec![Ok(Bytes::from("x"))]).boxed(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BlobStoreError::InvalidKey(_)), "{root_key:?}");
    }

    let size = store
        .upload(
            CONTAINER,
            &StorageLocation::from_raw("u/c/s/audio-1"),
            stream::iter(vec![Ok(Bytes::from("audio"))]).boxed(),
        )
        .await
        .unwrap();

    assert_eq!(size, 5);
}
