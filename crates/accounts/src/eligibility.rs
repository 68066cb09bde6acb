use banking_clients::Client;
use banking_products::Product;

use crate::account::ProposedAccount;

/// Everything the provisioning rules need for one attempt.
///
/// Built fresh per request once the client lookup, product lookup and
/// duplicate-account scan have all completed; consumed by [`crate::rules::decide`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityFact {
    pub client: Client,
    pub product: Product,
    /// Whether the client already holds an account with the same product code.
    pub already_has_account: bool,
    pub proposed: ProposedAccount,
}

impl EligibilityFact {
    pub fn new(
        client: Client,
        product: Product,
        already_has_account: bool,
        proposed: ProposedAccount,
    ) -> Self {
        Self {
            client,
            product,
            already_has_account,
            proposed,
        }
    }
}
