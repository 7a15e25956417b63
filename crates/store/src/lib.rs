//! Product persistence layer.
//!
//! The [`ProductStore`] trait is the seam between the HTTP service and
//! storage. Two implementations live side by side: a Postgres-backed store
//! for production and an in-memory store for tests.
//!
//! Both mutating operations are single atomic steps per product name
//! (an upsert-with-increment and a conditional decrement). There is
//! deliberately no find-then-save path anywhere in this crate: two
//! concurrent restocks of a brand-new name must converge on one row, and
//! two concurrent sales must never both observe the same stale stock.

pub mod error;
pub mod in_memory;
pub mod postgres;
pub mod product_store;

pub use error::StoreError;
pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;
pub use product_store::ProductStore;

/// Revenue contributed by a sale: `amount * price`, or zero when no price
/// was supplied.
pub(crate) fn sale_revenue(amount: i64, price: Option<f64>) -> f64 {
    price.map(|p| p * amount as f64).unwrap_or(0.0)
}
