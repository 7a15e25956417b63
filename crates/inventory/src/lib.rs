//! Inventory domain module.
//!
//! This crate contains the business rules for inventory, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod validate;

pub use product::Product;
pub use validate::{ValidationPolicy, validate_restock, validate_sale};
