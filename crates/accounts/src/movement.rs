use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use banking_core::Money;

use crate::account::Account;

/// Kind of a movement recorded against an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
    Payment,
    Charge,
}

/// One entry of an account's transaction history (read-only here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: Uuid,
    pub account_number: String,
    pub kind: MovementKind,
    pub amount: Money,
    pub occurred_at: DateTime<Utc>,
}

/// An account together with its movements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    #[serde(flatten)]
    pub account: Account,
    pub movements: Vec<Movement>,
}

impl AccountDetails {
    pub fn new(account: Account, movements: Vec<Movement>) -> Self {
        Self { account, movements }
    }
}
