//! Client lookup boundary.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use banking_clients::Client;
use banking_core::ClientCode;

use crate::error::LookupError;

/// Read-only access to client records owned by the client service.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    async fn find_by_code(&self, code: &ClientCode) -> Result<Client, LookupError>;
}

#[async_trait]
impl<S> ClientDirectory for Arc<S>
where
    S: ClientDirectory + ?Sized,
{
    async fn find_by_code(&self, code: &ClientCode) -> Result<Client, LookupError> {
        (**self).find_by_code(code).await
    }
}

/// In-memory client directory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryClientDirectory {
    inner: RwLock<HashMap<ClientCode, Client>>,
}

impl InMemoryClientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let directory = Self::new();
        for client in clients {
            directory.insert(client);
        }
        directory
    }

    pub fn insert(&self, client: Client) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(client.code.clone(), client);
        }
    }
}

#[async_trait]
impl ClientDirectory for InMemoryClientDirectory {
    async fn find_by_code(&self, code: &ClientCode) -> Result<Client, LookupError> {
        let map = self
            .inner
            .read()
            .map_err(|_| LookupError::Unavailable("lock poisoned".to_string()))?;
        map.get(code).cloned().ok_or(LookupError::NotFound)
    }
}
