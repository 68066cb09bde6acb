use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use banking_core::{AccountId, ClientCode, Entity, Money, ProductCode};

use crate::rules::InitialBalances;

/// Lifecycle state code of an account.
///
/// Only `Registered` is produced here; later states are set by workflows outside
/// this crate and are carried through untouched as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountState {
    Registered,
    Other(String),
}

impl AccountState {
    pub const REGISTERED_CODE: &'static str = "RA";

    pub fn from_code(code: &str) -> Self {
        match code {
            Self::REGISTERED_CODE => Self::Registered,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Registered => Self::REGISTERED_CODE,
            Self::Other(code) => code,
        }
    }
}

impl From<String> for AccountState {
    fn from(value: String) -> Self {
        Self::from_code(&value)
    }
}

impl From<AccountState> for String {
    fn from(value: AccountState) -> Self {
        value.code().to_string()
    }
}

/// Account request submitted by a caller, before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedAccount {
    pub client_code: ClientCode,
    pub product_code: ProductCode,
    /// Requested credit line; only meaningful for credit products.
    #[serde(default)]
    pub credit_line: Option<Money>,
}

impl ProposedAccount {
    pub fn new(client_code: ClientCode, product_code: ProductCode) -> Self {
        Self {
            client_code,
            product_code,
            credit_line: None,
        }
    }

    pub fn with_credit_line(mut self, credit_line: Money) -> Self {
        self.credit_line = Some(credit_line);
        self
    }

    /// Requested credit line, with "not supplied" read as zero.
    pub fn requested_credit_line(&self) -> Money {
        self.credit_line.unwrap_or(Money::ZERO)
    }
}

/// Freshly generated external identifiers of a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNumbers {
    pub account_number: String,
    pub interbank_number: String,
}

impl AccountNumbers {
    /// Generate a new pair of random (UUIDv4) numbers.
    pub fn generate() -> Self {
        Self {
            account_number: Uuid::new_v4().to_string(),
            interbank_number: Uuid::new_v4().to_string(),
        }
    }
}

/// Provisioned account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub account_number: String,
    pub interbank_number: String,
    pub client_code: ClientCode,
    pub product_code: ProductCode,
    pub state: AccountState,
    pub registered_at: DateTime<Utc>,
    pub credit_line: Money,
    pub available_amount: Money,
}

impl Account {
    /// Turn an accepted proposal into a registered account.
    ///
    /// Callers must only pass balances produced by [`crate::rules::decide`].
    pub fn provision(
        proposed: ProposedAccount,
        balances: InitialBalances,
        numbers: AccountNumbers,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AccountId::new(),
            account_number: numbers.account_number,
            interbank_number: numbers.interbank_number,
            client_code: proposed.client_code,
            product_code: proposed.product_code,
            state: AccountState::Registered,
            registered_at,
            credit_line: balances.credit_line,
            available_amount: balances.available_amount,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.state == AccountState::Registered
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal() -> ProposedAccount {
        ProposedAccount::new(
            ClientCode::new("CLI-001").unwrap(),
            ProductCode::new("CRE-PER").unwrap(),
        )
    }

    #[test]
    fn missing_credit_line_reads_as_zero() {
        assert_eq!(proposal().requested_credit_line(), Money::ZERO);
        assert_eq!(
            proposal()
                .with_credit_line(Money::from_minor(500))
                .requested_credit_line(),
            Money::from_minor(500)
        );
    }

    #[test]
    fn provision_sets_registered_state_and_numbers() {
        let numbers = AccountNumbers {
            account_number: "acc-1".to_string(),
            interbank_number: "ib-1".to_string(),
        };
        let now = Utc::now();
        let account = Account::provision(
            proposal(),
            InitialBalances {
                available_amount: Money::from_minor(700),
                credit_line: Money::from_minor(700),
            },
            numbers,
            now,
        );

        assert!(account.is_registered());
        assert_eq!(account.state.code(), "RA");
        assert_eq!(account.account_number, "acc-1");
        assert_eq!(account.interbank_number, "ib-1");
        assert_eq!(account.registered_at, now);
        assert_eq!(account.available_amount, Money::from_minor(700));
        assert_eq!(account.client_code, "CLI-001");
    }

    #[test]
    fn generated_numbers_are_distinct() {
        let a = AccountNumbers::generate();
        let b = AccountNumbers::generate();
        assert_ne!(a.account_number, b.account_number);
        assert_ne!(a.interbank_number, b.interbank_number);
        assert_ne!(a.account_number, a.interbank_number);
    }

    #[test]
    fn state_serializes_as_wire_code() {
        let json = serde_json::to_value(AccountState::Registered).unwrap();
        assert_eq!(json, "RA");
        let other: AccountState = serde_json::from_value(serde_json::json!("BL")).unwrap();
        assert_eq!(other, AccountState::Other("BL".to_string()));
    }

    #[test]
    fn proposal_accepts_missing_credit_line_field() {
        let proposed: ProposedAccount = serde_json::from_value(serde_json::json!({
            "client_code": "CLI-001",
            "product_code": "CBA-AHO",
        }))
        .unwrap();
        assert_eq!(proposed.credit_line, None);
    }
}
