//! Movement history boundary (read-only).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use banking_accounts::Movement;

use crate::error::LookupError;

/// Read-only access to account movements owned by the movement service.
#[async_trait]
pub trait MovementHistory: Send + Sync {
    /// Movements of one account, oldest first. Unknown accounts have none.
    async fn find_by_account_number(&self, account_number: &str)
    -> Result<Vec<Movement>, LookupError>;
}

#[async_trait]
impl<S> MovementHistory for Arc<S>
where
    S: MovementHistory + ?Sized,
{
    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Vec<Movement>, LookupError> {
        (**self).find_by_account_number(account_number).await
    }
}

/// In-memory movement history for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryMovementHistory {
    inner: RwLock<HashMap<String, Vec<Movement>>>,
}

impl InMemoryMovementHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, movement: Movement) {
        if let Ok(mut map) = self.inner.write() {
            let entries = map.entry(movement.account_number.clone()).or_default();
            entries.push(movement);
            entries.sort_by_key(|m| m.occurred_at);
        }
    }
}

#[async_trait]
impl MovementHistory for InMemoryMovementHistory {
    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Vec<Movement>, LookupError> {
        let map = self
            .inner
            .read()
            .map_err(|_| LookupError::Unavailable("lock poisoned".to_string()))?;
        Ok(map.get(account_number).cloned().unwrap_or_default())
    }
}
