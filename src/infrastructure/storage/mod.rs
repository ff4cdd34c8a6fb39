mod azure_store;
mod container_clients;
mod local_store;
mod memory_store;
mod object_transfer;
mod s3_store;
mod store_factory;

pub use azure_store::AzureBlobStore;
pub use local_store::LocalBlobStore;
pub use memory_store::InMemoryBlobStore;
pub use s3_store::S3BlobStore;
pub use store_factory::BlobStoreFactory;
