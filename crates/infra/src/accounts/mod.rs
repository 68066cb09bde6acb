//! Account persistence boundary.
//!
//! Durable storage is owned by the repository; the provisioning core only
//! hands it fully formed accounts.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryAccountRepository;
pub use r#trait::AccountRepository;
