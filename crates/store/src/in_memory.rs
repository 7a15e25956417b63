//! In-memory product store for tests.
//!
//! A mutex over an insertion-ordered vec. Each trait method holds the lock
//! for its whole transition, which gives the same per-name atomicity the
//! Postgres store gets from its single-statement updates.

use std::sync::Mutex;

use async_trait::async_trait;

use stockbook_inventory::Product;

use crate::error::StoreError;
use crate::product_store::ProductStore;
use crate::sale_revenue;

#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.name == name).cloned())
    }

    async fn upsert_restock(&self, name: &str, amount: i64) -> Result<Product, StoreError> {
        let mut products = self.products.lock().unwrap();
        if let Some(product) = products.iter_mut().find(|p| p.name == name) {
            product.stock += amount;
            product.updated_at = chrono::Utc::now();
            return Ok(product.clone());
        }

        let product = Product::new(name, amount);
        products.push(product.clone());
        Ok(product)
    }

    async fn apply_sale(
        &self,
        name: &str,
        amount: i64,
        price: Option<f64>,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.lock().unwrap();
        let Some(product) = products.iter_mut().find(|p| p.name == name) else {
            return Ok(None);
        };
        if product.stock < amount {
            return Ok(None);
        }

        product.stock -= amount;
        product.sales += sale_revenue(amount, price);
        product.updated_at = chrono::Utc::now();
        Ok(Some(product.clone()))
    }

    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.products.lock().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn restock_creates_then_accumulates() {
        let store = InMemoryProductStore::new();

        let first = store.upsert_restock("egg", 10).await.unwrap();
        assert_eq!(first.stock, 10);
        assert_eq!(first.sales, 0.0);

        let second = store.upsert_restock("egg", 5).await.unwrap();
        assert_eq!(second.stock, 15);

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn sale_decrements_stock_and_accumulates_revenue() {
        let store = InMemoryProductStore::new();
        store.upsert_restock("egg", 10).await.unwrap();

        let sold = store.apply_sale("egg", 3, Some(2.0)).await.unwrap().unwrap();
        assert_eq!(sold.stock, 7);
        assert_eq!(sold.sales, 6.0);
    }

    #[tokio::test]
    async fn sale_without_price_leaves_revenue_untouched() {
        let store = InMemoryProductStore::new();
        store.upsert_restock("egg", 10).await.unwrap();

        let sold = store.apply_sale("egg", 4, None).await.unwrap().unwrap();
        assert_eq!(sold.stock, 6);
        assert_eq!(sold.sales, 0.0);
    }

    #[tokio::test]
    async fn oversold_sale_leaves_product_unmodified() {
        let store = InMemoryProductStore::new();
        store.upsert_restock("egg", 2).await.unwrap();

        assert!(store.apply_sale("egg", 3, Some(1.0)).await.unwrap().is_none());

        let product = store.find_by_name("egg").await.unwrap().unwrap();
        assert_eq!(product.stock, 2);
        assert_eq!(product.sales, 0.0);
    }

    #[tokio::test]
    async fn sale_on_unknown_product_reports_no_row() {
        let store = InMemoryProductStore::new();
        assert!(store.apply_sale("ghost", 1, None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_all_is_idempotent() {
        let store = InMemoryProductStore::new();
        store.delete_all().await.unwrap();

        store.upsert_restock("egg", 1).await.unwrap();
        store.delete_all().await.unwrap();
        store.delete_all().await.unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_all_preserves_insertion_order() {
        let store = InMemoryProductStore::new();
        for name in ["apple", "banana", "cherry"] {
            store.upsert_restock(name, 1).await.unwrap();
        }

        let names: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["apple", "banana", "cherry"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_restocks_of_new_name_do_not_lose_updates() {
        const WRITERS: i64 = 64;

        let store = Arc::new(InMemoryProductStore::new());

        let mut handles = Vec::new();
        for _ in 0..WRITERS {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.upsert_restock("widget", 1).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1, "concurrent first-restocks must not duplicate rows");
        assert_eq!(all[0].stock, WRITERS);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_sales_never_drive_stock_negative() {
        const BUYERS: usize = 32;

        let store = Arc::new(InMemoryProductStore::new());
        store.upsert_restock("widget", 10).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..BUYERS {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.apply_sale("widget", 1, Some(1.0)).await.unwrap().is_some()
            }));
        }

        let mut succeeded = 0;
        for handle in handles {
            if handle.await.unwrap() {
                succeeded += 1;
            }
        }

        assert_eq!(succeeded, 10);
        let product = store.find_by_name("widget").await.unwrap().unwrap();
        assert_eq!(product.stock, 0);
    }
}
