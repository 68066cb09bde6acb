//! Eligibility resolution: gather the client, the product and the
//! duplicate-account flag for one provisioning attempt.

use std::time::Duration;

use futures::TryStreamExt;

use banking_accounts::{EligibilityFact, ProposedAccount};
use banking_clients::Client;
use banking_core::{ClientCode, ProductCode};
use banking_products::Product;

use crate::accounts::AccountRepository;
use crate::clients::ClientDirectory;
use crate::error::LookupFailure;
use crate::products::ProductCatalog;

/// Resolves the [`EligibilityFact`] for a proposed account.
///
/// The three lookups are joined, not chained: all of them are started together
/// and the fact exists only once every one has completed. When several fail,
/// the error reported follows a fixed priority (client, product, account scan)
/// so the outcome does not depend on completion order.
pub struct EligibilityResolver<'a, C, P, R> {
    clients: &'a C,
    products: &'a P,
    accounts: &'a R,
    lookup_timeout: Option<Duration>,
}

impl<'a, C, P, R> EligibilityResolver<'a, C, P, R>
where
    C: ClientDirectory,
    P: ProductCatalog,
    R: AccountRepository,
{
    pub fn new(clients: &'a C, products: &'a P, accounts: &'a R) -> Self {
        Self {
            clients,
            products,
            accounts,
            lookup_timeout: None,
        }
    }

    /// Bound the joined lookups; exceeding it fails with [`LookupFailure::TimedOut`].
    pub fn with_timeout(mut self, lookup_timeout: Option<Duration>) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    pub async fn resolve(&self, proposed: ProposedAccount) -> Result<EligibilityFact, LookupFailure> {
        let lookups = async {
            let (client, product, already_has_account) = tokio::join!(
                self.fetch_client(&proposed.client_code),
                self.fetch_product(&proposed.product_code),
                self.holds_product(&proposed.client_code, &proposed.product_code),
            );
            Ok::<_, LookupFailure>((client?, product?, already_has_account?))
        };

        let (client, product, already_has_account) = match self.lookup_timeout {
            Some(limit) => tokio::time::timeout(limit, lookups)
                .await
                .map_err(|_| LookupFailure::TimedOut(limit))??,
            None => lookups.await?,
        };

        tracing::debug!(
            client_type = %client.client_type,
            product_type = %product.product_type,
            already_has_account,
            "eligibility resolved"
        );

        Ok(EligibilityFact::new(client, product, already_has_account, proposed))
    }

    async fn fetch_client(&self, code: &ClientCode) -> Result<Client, LookupFailure> {
        self.clients
            .find_by_code(code)
            .await
            .map_err(|err| LookupFailure::client(code, err))
    }

    async fn fetch_product(&self, code: &ProductCode) -> Result<Product, LookupFailure> {
        self.products
            .find_by_code(code)
            .await
            .map_err(|err| LookupFailure::product(code, err))
    }

    /// Whether the client already holds an account with exactly this product code.
    ///
    /// Compares specific product codes, not product types. Stops at the first match.
    async fn holds_product(
        &self,
        client_code: &ClientCode,
        product_code: &ProductCode,
    ) -> Result<bool, LookupFailure> {
        let scan_failed = |source| LookupFailure::AccountScan {
            client_code: client_code.clone(),
            source,
        };

        let mut accounts = self.accounts.find_by_client_code(client_code);
        while let Some(account) = accounts.try_next().await.map_err(scan_failed)? {
            if account.product_code == *product_code {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
