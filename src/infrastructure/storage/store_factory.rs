use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::azure_store::AzureBlobStore;
use super::local_store::LocalBlobStore;
use super::memory_store::InMemoryBlobStore;
use super::s3_store::S3BlobStore;

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let store = LocalBlobStore::new(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => Ok(Arc::new(InMemoryBlobStore::new())),
            StorageProviderSetting::S3 => Ok(Arc::new(S3BlobStore::new(settings.region.clone()))),
            StorageProviderSetting::Azure => {
                let account = settings.azure_account.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("azure_account required".into())
                })?;
                let key = settings.azure_access_key.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("azure_access_key required".into())
                })?;
                Ok(Arc::new(AzureBlobStore::new(account, key)))
            }
        }
    }
}
