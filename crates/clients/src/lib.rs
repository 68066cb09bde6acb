//! Clients domain module (account holders).
//!
//! Client records are owned by the client service; this crate only models what
//! the provisioning rules read from them.

pub mod client;

pub use client::{Client, ClientType};
