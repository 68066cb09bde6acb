//! Infrastructure-facing error types.
//!
//! Policy rejections live in `banking_accounts::Rejection`; everything here is a
//! lookup or storage problem. `ProvisionError` keeps the two apart so callers can
//! tell "not allowed" from "system problem".

use std::time::Duration;

use thiserror::Error;

use banking_accounts::Rejection;
use banking_core::{AccountId, ClientCode, ProductCode};

/// Failure reported by a lookup collaborator (client, product, movement services).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("not found")]
    NotFound,

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Account repository error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("account not found: {0}")]
    NotFound(AccountId),

    #[error("storage error: {0}")]
    Storage(String),
}

/// One of the eligibility lookups failed; identifies which one and why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    #[error("client not found: {0}")]
    ClientNotFound(ClientCode),

    #[error("client lookup failed for {code}: {reason}")]
    ClientUnavailable { code: ClientCode, reason: String },

    #[error("product not found: {0}")]
    ProductNotFound(ProductCode),

    #[error("product lookup failed for {code}: {reason}")]
    ProductUnavailable { code: ProductCode, reason: String },

    #[error("existing-account scan failed for client {client_code}")]
    AccountScan {
        client_code: ClientCode,
        #[source]
        source: RepositoryError,
    },

    #[error("eligibility lookups timed out after {0:?}")]
    TimedOut(Duration),
}

impl LookupFailure {
    pub(crate) fn client(code: &ClientCode, err: LookupError) -> Self {
        match err {
            LookupError::NotFound => Self::ClientNotFound(code.clone()),
            LookupError::Unavailable(reason) => Self::ClientUnavailable {
                code: code.clone(),
                reason,
            },
        }
    }

    pub(crate) fn product(code: &ProductCode, err: LookupError) -> Self {
        match err {
            LookupError::NotFound => Self::ProductNotFound(code.clone()),
            LookupError::Unavailable(reason) => Self::ProductUnavailable {
                code: code.clone(),
                reason,
            },
        }
    }
}

/// Outcome of a failed `provision` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisionError {
    /// The provisioning rules refused the account.
    #[error("account rejected: {0}")]
    Rejected(#[from] Rejection),

    /// Client, product or existing-account lookup failed; nothing was decided.
    #[error("eligibility lookup failed: {0}")]
    Lookup(#[from] LookupFailure),

    /// The account was accepted but could not be saved.
    #[error("persisting account failed: {0}")]
    Persistence(#[from] RepositoryError),
}

impl ProvisionError {
    /// Whether this is a business-policy outcome rather than a system problem.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ProvisionError::Rejected(_))
    }
}

/// Failure while assembling account details.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailsError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("movement lookup failed for account {account_number}")]
    Movements {
        account_number: String,
        #[source]
        source: LookupError,
    },
}
