//! Infrastructure layer: collaborator boundaries, in-memory stores, config, and
//! the account provisioning service that composes them.

pub mod account_service;
pub mod accounts;
pub mod clients;
pub mod config;
pub mod error;
pub mod movements;
pub mod products;
pub mod resolver;


pub use account_service::AccountService;
pub use accounts::{AccountRepository, InMemoryAccountRepository};
pub use clients::{ClientDirectory, InMemoryClientDirectory};
pub use config::ServiceConfig;
pub use error::{DetailsError, LookupError, LookupFailure, ProvisionError, RepositoryError};
pub use movements::{InMemoryMovementHistory, MovementHistory};
pub use products::{InMemoryProductCatalog, ProductCatalog};
pub use resolver::EligibilityResolver;
