//! Accounts domain module.
//!
//! Holds the account model and the provisioning rules that decide whether a
//! proposed account may be opened, implemented purely as deterministic domain
//! logic (no IO, no storage).

pub mod account;
pub mod eligibility;
pub mod movement;
pub mod rules;

pub use account::{Account, AccountNumbers, AccountState, ProposedAccount};
pub use eligibility::EligibilityFact;
pub use movement::{AccountDetails, Movement, MovementKind};
pub use rules::{InitialBalances, Rejection, decide, provision};
