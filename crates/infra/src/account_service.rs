//! Account service: provisioning plus the plain repository delegations.
//!
//! ```text
//! ProposedAccount
//!   ↓
//! 1. Resolve eligibility (client, product, duplicate scan; joined)
//!   ↓
//! 2. Decide (pure rules; reject or initial balances)
//!   ↓
//! 3. Stamp numbers, state and registration time
//!   ↓
//! 4. Save
//! ```
//!
//! Each step runs only after the previous one succeeded, so a failed lookup or
//! a rejection never reaches the repository. Dropping the `provision` future
//! before step 4 leaves nothing behind.

use chrono::Utc;
use futures::TryStreamExt;
use futures::future::try_join_all;

use banking_accounts::{Account, AccountDetails, AccountNumbers, ProposedAccount, rules};
use banking_core::{AccountId, ClientCode, Entity};

use crate::accounts::AccountRepository;
use crate::clients::ClientDirectory;
use crate::config::ServiceConfig;
use crate::error::{DetailsError, ProvisionError, RepositoryError};
use crate::movements::MovementHistory;
use crate::products::ProductCatalog;
use crate::resolver::EligibilityResolver;

/// Entry point for account operations.
///
/// Holds no per-request state; concurrent calls share only the collaborators.
pub struct AccountService<C, P, R, M> {
    clients: C,
    products: P,
    accounts: R,
    movements: M,
    config: ServiceConfig,
}

impl<C, P, R, M> AccountService<C, P, R, M>
where
    C: ClientDirectory,
    P: ProductCatalog,
    R: AccountRepository,
    M: MovementHistory,
{
    pub fn new(clients: C, products: P, accounts: R, movements: M, config: ServiceConfig) -> Self {
        Self {
            clients,
            products,
            accounts,
            movements,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn resolver(&self) -> EligibilityResolver<'_, C, P, R> {
        EligibilityResolver::new(&self.clients, &self.products, &self.accounts)
            .with_timeout(self.config.lookup_timeout)
    }

    /// Validate a proposed account and, if allowed, save it as a registered account.
    ///
    /// Not idempotent: every accepted call creates a new account with fresh numbers.
    #[tracing::instrument(
        skip(self, proposed),
        fields(client_code = %proposed.client_code, product_code = %proposed.product_code)
    )]
    pub async fn provision(&self, proposed: ProposedAccount) -> Result<Account, ProvisionError> {
        tracing::info!("begin provision account");

        let fact = self
            .resolver()
            .resolve(proposed)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "eligibility lookup failed"))?;

        let account = rules::provision(fact, AccountNumbers::generate, Utc::now())
            .inspect_err(|r| tracing::info!(reason = r.code(), "account proposal rejected"))?;

        let saved = self
            .accounts
            .save(account)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "saving provisioned account failed"))?;

        tracing::info!(
            account_id = %saved.id,
            account_number = %saved.account_number,
            "finish provision account"
        );
        Ok(saved)
    }

    /// Replace an existing account. Unknown ids fail with `NotFound`.
    #[tracing::instrument(skip(self, account), fields(account_id = %account.id))]
    pub async fn update(&self, account: Account) -> Result<Account, RepositoryError> {
        tracing::info!("begin update account");
        let id = *account.id();
        if self.accounts.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound(id));
        }
        let saved = self.accounts.save(account).await?;
        tracing::info!("finish update account");
        Ok(saved)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: AccountId) -> Result<(), RepositoryError> {
        tracing::info!("begin delete account");
        self.accounts.delete(id).await?;
        tracing::info!("finish delete account");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn find(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let found = self.accounts.find_by_id(id).await?;
        tracing::debug!(found = found.is_some(), "find account");
        Ok(found)
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let found = self.accounts.find_by_account_number(account_number).await?;
        tracing::debug!(found = found.is_some(), "find account by number");
        Ok(found)
    }

    #[tracing::instrument(skip(self, client_code), fields(client_code = %client_code))]
    pub async fn find_by_client_code(
        &self,
        client_code: &ClientCode,
    ) -> Result<Vec<Account>, RepositoryError> {
        let accounts: Vec<Account> = self
            .accounts
            .find_by_client_code(client_code)
            .try_collect()
            .await?;
        tracing::debug!(count = accounts.len(), "find accounts by client");
        Ok(accounts)
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Account>, RepositoryError> {
        let accounts: Vec<Account> = self.accounts.find_all().try_collect().await?;
        tracing::debug!(count = accounts.len(), "find all accounts");
        Ok(accounts)
    }

    /// Accounts of a client together with their movements.
    ///
    /// Movement lookups for the different accounts run concurrently; the first
    /// failure aborts the whole call.
    #[tracing::instrument(skip(self, client_code), fields(client_code = %client_code))]
    pub async fn find_details_by_client_code(
        &self,
        client_code: &ClientCode,
    ) -> Result<Vec<AccountDetails>, DetailsError> {
        let accounts = self.find_by_client_code(client_code).await?;

        try_join_all(accounts.into_iter().map(|account| async move {
            let movements = self
                .movements
                .find_by_account_number(&account.account_number)
                .await
                .map_err(|source| DetailsError::Movements {
                    account_number: account.account_number.clone(),
                    source,
                })?;
            Ok::<_, DetailsError>(AccountDetails::new(account, movements))
        }))
        .await
    }
}
