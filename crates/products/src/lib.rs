//! Products domain module (banking catalog).
//!
//! Product records are owned by the product service; this crate models the
//! product type and the specific product codes the provisioning rules look at.

pub mod product;

pub use product::{Product, ProductType, codes};
