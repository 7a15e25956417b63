use async_trait::async_trait;

use stockbook_inventory::Product;

use crate::error::StoreError;

/// Durable key-value persistence of [`Product`] records, keyed by `name`.
///
/// ## Atomicity contract
///
/// `upsert_restock` and `apply_sale` are each a single atomic transition on
/// one product. Implementations must serialize concurrent calls for the same
/// name (conditional update / atomic field increment), never read-modify-write
/// in separate steps.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Look up a product by name. No side effects.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError>;

    /// Increment `stock` by `amount`, creating the product with
    /// `stock = amount` and `sales = 0` if the name is unseen.
    async fn upsert_restock(&self, name: &str, amount: i64) -> Result<Product, StoreError>;

    /// Decrement `stock` by `amount` and add `amount * price` (zero when
    /// `price` is absent) to `sales`, in one conditional step.
    ///
    /// Returns `Ok(None)` when no qualifying row exists — either the product
    /// is unknown or its stock is below `amount` — leaving the row untouched.
    async fn apply_sale(
        &self,
        name: &str,
        amount: i64,
        price: Option<f64>,
    ) -> Result<Option<Product>, StoreError>;

    /// Every stored product, in insertion order.
    async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Remove every product. Idempotent: an empty store is a no-op success.
    async fn delete_all(&self) -> Result<(), StoreError>;
}
