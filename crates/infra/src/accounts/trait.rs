use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;

use banking_accounts::Account;
use banking_core::{AccountId, ClientCode};

use crate::error::RepositoryError;

/// Account store.
///
/// ## Save semantics
///
/// `save()` is an idempotent upsert keyed by `Account::id`. Saving the same
/// account twice leaves one record.
///
/// ## Stream semantics
///
/// `find_by_client_code()` and `find_all()` return finite, lazily consumed
/// streams. Each call starts a fresh scan, so a stream can be restarted by
/// calling again. Consumers may stop early; dropping the stream ends the scan.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn save(&self, account: Account) -> Result<Account, RepositoryError>;

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError>;

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, RepositoryError>;

    fn find_by_client_code(
        &self,
        client_code: &ClientCode,
    ) -> BoxStream<'_, Result<Account, RepositoryError>>;

    fn find_all(&self) -> BoxStream<'_, Result<Account, RepositoryError>>;

    /// Delete by id. Deleting an unknown id is not an error.
    async fn delete(&self, id: AccountId) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<S> AccountRepository for Arc<S>
where
    S: AccountRepository + ?Sized,
{
    async fn save(&self, account: Account) -> Result<Account, RepositoryError> {
        (**self).save(account).await
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        (**self).find_by_account_number(account_number).await
    }

    fn find_by_client_code(
        &self,
        client_code: &ClientCode,
    ) -> BoxStream<'_, Result<Account, RepositoryError>> {
        (**self).find_by_client_code(client_code)
    }

    fn find_all(&self) -> BoxStream<'_, Result<Account, RepositoryError>> {
        (**self).find_all()
    }

    async fn delete(&self, id: AccountId) -> Result<(), RepositoryError> {
        (**self).delete(id).await
    }
}
