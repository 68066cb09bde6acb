use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};

use banking_accounts::Account;
use banking_core::{AccountId, ClientCode, Entity};

use super::r#trait::AccountRepository;
use crate::error::RepositoryError;

/// In-memory account repository.
///
/// Intended for tests/dev. Scans snapshot the matching accounts when the stream
/// is created, ordered by registration time.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> RepositoryError {
        RepositoryError::Storage("lock poisoned".to_string())
    }

    fn scan(&self, keep: impl Fn(&Account) -> bool) -> BoxStream<'_, Result<Account, RepositoryError>> {
        let accounts = match self.accounts.read() {
            Ok(accounts) => accounts,
            Err(_) => return stream::iter([Err(Self::poisoned())]).boxed(),
        };

        let mut matched: Vec<Account> = accounts.values().filter(|a| keep(a)).cloned().collect();
        matched.sort_by(|a, b| {
            a.registered_at
                .cmp(&b.registered_at)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });

        stream::iter(matched.into_iter().map(Ok)).boxed()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, account: Account) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.write().map_err(|_| Self::poisoned())?;
        accounts.insert(*account.id(), account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.read().map_err(|_| Self::poisoned())?;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.read().map_err(|_| Self::poisoned())?;
        Ok(accounts
            .values()
            .find(|a| a.account_number == account_number)
            .cloned())
    }

    fn find_by_client_code(
        &self,
        client_code: &ClientCode,
    ) -> BoxStream<'_, Result<Account, RepositoryError>> {
        let client_code = client_code.clone();
        self.scan(move |a| a.client_code == client_code)
    }

    fn find_all(&self) -> BoxStream<'_, Result<Account, RepositoryError>> {
        self.scan(|_| true)
    }

    async fn delete(&self, id: AccountId) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.write().map_err(|_| Self::poisoned())?;
        accounts.remove(&id);
        Ok(())
    }
}
