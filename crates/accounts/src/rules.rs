//! Provisioning rules: which client/product combinations may open an account,
//! and with what initial balances.
//!
//! Pure and deterministic. Identifier generation and the registration clock are
//! supplied by the caller through [`provision`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use banking_clients::ClientType;
use banking_core::Money;
use banking_products::ProductType;

use crate::account::{Account, AccountNumbers};
use crate::eligibility::EligibilityFact;

/// Initial financial state of an accepted account.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialBalances {
    pub available_amount: Money,
    pub credit_line: Money,
}

impl InitialBalances {
    /// Deposit accounts open empty with no credit line.
    pub fn empty() -> Self {
        Self {
            available_amount: Money::ZERO,
            credit_line: Money::ZERO,
        }
    }

    /// Credit products open with the whole line available.
    pub fn credit(line: Money) -> Self {
        Self {
            available_amount: line,
            credit_line: line,
        }
    }
}

/// Business-policy rejection. A defined outcome, not a system failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", content = "code", rename_all = "snake_case")]
pub enum Rejection {
    #[error("duplicate account of this type for this client")]
    DuplicateAccount,

    #[error("duplicate credit of this type for this client")]
    DuplicateCredit,

    #[error("credit line is required")]
    CreditLineRequired,

    #[error("business clients may only hold current accounts")]
    BusinessCurrentAccountOnly,

    #[error("business clients may only hold business credit or credit-card products")]
    BusinessCreditProductOnly,

    #[error("unknown product type code: {0}")]
    UnknownProductType(String),

    #[error("unknown client type code: {0}")]
    UnknownClientType(String),
}

impl Rejection {
    /// Stable machine-readable code for callers.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::DuplicateAccount => "duplicate_account",
            Rejection::DuplicateCredit => "duplicate_credit",
            Rejection::CreditLineRequired => "credit_line_required",
            Rejection::BusinessCurrentAccountOnly => "business_current_account_only",
            Rejection::BusinessCreditProductOnly => "business_credit_product_only",
            Rejection::UnknownProductType(_) => "unknown_product_type",
            Rejection::UnknownClientType(_) => "unknown_client_type",
        }
    }
}

/// Decide whether the proposed account may be opened.
///
/// Arms are ordered; the first match wins. Business credit products are limited
/// by the product whitelist only, not by the duplicate-account scan.
pub fn decide(fact: &EligibilityFact) -> Result<InitialBalances, Rejection> {
    let requested = fact.proposed.requested_credit_line();
    let product = &fact.product;

    match (&fact.client.client_type, &product.product_type) {
        (ClientType::Personal, ProductType::Checking) if fact.already_has_account => {
            Err(Rejection::DuplicateAccount)
        }
        (ClientType::Personal, ProductType::Checking) => Ok(InitialBalances::empty()),
        (ClientType::Personal, ProductType::Credit) if !requested.is_positive() => {
            Err(Rejection::CreditLineRequired)
        }
        (ClientType::Personal, ProductType::Credit) if fact.already_has_account => {
            Err(Rejection::DuplicateCredit)
        }
        (ClientType::Personal, ProductType::Credit) => Ok(InitialBalances::credit(requested)),

        (ClientType::Business, ProductType::Checking) if product.is_current_account() => {
            Ok(InitialBalances::empty())
        }
        (ClientType::Business, ProductType::Checking) => {
            Err(Rejection::BusinessCurrentAccountOnly)
        }
        (ClientType::Business, ProductType::Credit) if !requested.is_positive() => {
            Err(Rejection::CreditLineRequired)
        }
        (ClientType::Business, ProductType::Credit) if product.is_business_credit_eligible() => {
            Ok(InitialBalances::credit(requested))
        }
        (ClientType::Business, ProductType::Credit) => Err(Rejection::BusinessCreditProductOnly),

        (ClientType::Personal | ClientType::Business, ProductType::Unrecognized(code)) => {
            Err(Rejection::UnknownProductType(code.clone()))
        }
        (ClientType::Unrecognized(code), _) => Err(Rejection::UnknownClientType(code.clone())),
    }
}

/// Decide, then stamp an accepted proposal as a registered account.
///
/// Numbers and timestamp are only consumed on acceptance.
pub fn provision(
    fact: EligibilityFact,
    numbers: impl FnOnce() -> AccountNumbers,
    registered_at: DateTime<Utc>,
) -> Result<Account, Rejection> {
    let balances = decide(&fact)?;
    Ok(Account::provision(fact.proposed, balances, numbers(), registered_at))
}
