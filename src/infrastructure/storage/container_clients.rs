use std::collections::HashMap;
use std::sync::Arc;

use object_store::ObjectStore;
use tokio::sync::RwLock;

use crate::application::ports::BlobStoreError;

use super::object_transfer::validate_container;

type BuildClient =
    dyn Fn(&str) -> Result<Arc<dyn ObjectStore>, object_store::Error> + Send + Sync;

/// Lazily built, cached clients for cloud stores that bind one client per bucket or container.
pub(super) struct ContainerClients {
    clients: RwLock<HashMap<String, Arc<dyn ObjectStore>>>,
    build: Box<BuildClient>,
}

impl ContainerClients {
    pub(super) fn new<F>(build: F) -> Self
    where
        F: Fn(&str) -> Result<Arc<dyn ObjectStore>, object_store::Error> + Send + Sync + 'static,
    {
        Self {
            clients: RwLock::new(HashMap::new()),
            build: Box::new(build),
        }
    }

    pub(super) async fn get(&self, container: &str) -> Result<Arc<dyn ObjectStore>, BlobStoreError> {
        validate_container(container)?;

        if let Some(client) = self.clients.read().await.get(container) {
            return Ok(Arc::clone(client));
        }

        let mut clients = self.clients.write().await;
        if let Some(client) = clients.get(container) {
            return Ok(Arc::clone(client));
        }

        let client = (self.build)(container)
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;
        clients.insert(container.to_string(), Arc::clone(&client));
        tracing::debug!(container = %container, "Object store client created");
        Ok(client)
    }
}
