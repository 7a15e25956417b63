//! Inventory service: orchestrates validated requests into store calls and
//! shapes the result contract consumed by the route handlers.

use std::sync::Arc;

use thiserror::Error;

use stockbook_core::DomainError;
use stockbook_inventory::{validate_restock, validate_sale};
use stockbook_store::{ProductStore, StoreError};

use crate::config::ServiceConfig;

/// Services shared by all request handlers.
pub struct AppServices {
    pub inventory: InventoryService,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>, config: ServiceConfig) -> Self {
        Self {
            inventory: InventoryService::new(store, config),
        }
    }
}

/// Failure at the service boundary: a deterministic domain rejection or an
/// infrastructure fault from the store.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a restock: the product name and its resulting stock level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockReceipt {
    pub name: String,
    pub stock: i64,
}

/// Outcome of a sale. Echoes what the caller asked for; `price` is carried
/// only when the caller supplied one, so the response can omit it.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleReceipt {
    pub name: String,
    pub amount: i64,
    pub price: Option<f64>,
}

pub struct InventoryService {
    store: Arc<dyn ProductStore>,
    config: ServiceConfig,
}

impl InventoryService {
    pub fn new(store: Arc<dyn ProductStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// Increase `name`'s stock by `amount`, creating the product on first
    /// sight. Single atomic store call.
    pub async fn restock(&self, name: &str, amount: i64) -> Result<RestockReceipt, ServiceError> {
        validate_restock(&self.config.policy, name, amount)?;

        let product = self.store.upsert_restock(name, amount).await?;
        Ok(RestockReceipt {
            name: product.name,
            stock: product.stock,
        })
    }

    /// Record a sale: decrement stock, accumulate revenue.
    ///
    /// An unknown product and an oversold product are the same failure here;
    /// the conditional update reports neither row nor reason, and a second
    /// read is only taken to put the available count in the error.
    pub async fn record_sale(
        &self,
        name: &str,
        amount: i64,
        price: Option<f64>,
    ) -> Result<SaleReceipt, ServiceError> {
        validate_sale(&self.config.policy, name, amount, price)?;

        match self.store.apply_sale(name, amount, price).await? {
            Some(_) => Ok(SaleReceipt {
                name: name.to_string(),
                amount,
                price,
            }),
            None => {
                let available = self
                    .store
                    .find_by_name(name)
                    .await?
                    .map(|p| p.stock)
                    .unwrap_or(0);
                Err(DomainError::insufficient_stock(amount, available).into())
            }
        }
    }

    /// Stock level for one product.
    ///
    /// Under the strict lookup policy (default) an unknown name is
    /// `NotFound`; otherwise unknown names answer `0`.
    pub async fn stock_level(&self, name: &str) -> Result<i64, ServiceError> {
        match self.store.find_by_name(name).await? {
            Some(product) => Ok(product.stock),
            None if self.config.strict_stock_lookup => Err(DomainError::not_found().into()),
            None => Ok(0),
        }
    }

    /// Every product holding stock, in insertion order. Products at exactly
    /// zero stock are omitted.
    pub async fn stock_levels(&self) -> Result<Vec<(String, i64)>, ServiceError> {
        let products = self.store.list_all().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.stock > 0)
            .map(|p| (p.name, p.stock))
            .collect())
    }

    /// Sum of recorded revenue across all products. `0.0` on an empty store;
    /// formatting to two decimal places happens at the transport boundary.
    pub async fn total_sales(&self) -> Result<f64, ServiceError> {
        let products = self.store.list_all().await?;
        Ok(products.iter().map(|p| p.sales).sum())
    }

    /// Remove every product. Always succeeds, including on an empty store.
    pub async fn reset(&self) -> Result<(), ServiceError> {
        self.store.delete_all().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_store::InMemoryProductStore;

    fn service() -> InventoryService {
        service_with(ServiceConfig::default())
    }

    fn service_with(config: ServiceConfig) -> InventoryService {
        InventoryService::new(Arc::new(InMemoryProductStore::new()), config)
    }

    #[tokio::test]
    async fn sequential_restocks_accumulate() {
        let svc = service();

        svc.restock("egg", 10).await.unwrap();
        let receipt = svc.restock("egg", 5).await.unwrap();

        assert_eq!(receipt.stock, 15);
    }

    #[tokio::test]
    async fn restock_rejects_invalid_input_before_store_access() {
        let svc = service();

        let err = svc.restock("", 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));

        let err = svc.restock("egg", 0).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));

        // Nothing was written.
        assert!(svc.stock_levels().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sale_reduces_stock_and_echoes_request() {
        let svc = service();
        svc.restock("egg", 10).await.unwrap();

        let receipt = svc.record_sale("egg", 3, Some(2.0)).await.unwrap();
        assert_eq!(receipt.name, "egg");
        assert_eq!(receipt.amount, 3);
        assert_eq!(receipt.price, Some(2.0));

        assert_eq!(svc.stock_level("egg").await.unwrap(), 7);
    }

    #[tokio::test]
    async fn oversold_sale_fails_and_leaves_product_unmodified() {
        let svc = service();
        svc.restock("egg", 2).await.unwrap();

        let err = svc.record_sale("egg", 5, Some(1.0)).await.unwrap_err();
        match err {
            ServiceError::Domain(DomainError::InsufficientStock {
                requested,
                available,
            }) => {
                assert_eq!(requested, 5);
                assert_eq!(available, 2);
            }
            other => panic!("Expected InsufficientStock, got {other:?}"),
        }

        assert_eq!(svc.stock_level("egg").await.unwrap(), 2);
        assert_eq!(svc.total_sales().await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn sale_on_unknown_product_reports_insufficient_stock() {
        let svc = service();
        let err = svc.record_sale("ghost", 1, None).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::InsufficientStock { available: 0, .. })
        ));
    }

    #[tokio::test]
    async fn total_sales_sums_every_contribution() {
        let svc = service();
        svc.restock("a", 10).await.unwrap();
        svc.restock("b", 10).await.unwrap();

        svc.record_sale("a", 1, Some(1.005)).await.unwrap();
        svc.record_sale("b", 2, Some(1.0)).await.unwrap();
        svc.record_sale("a", 1, Some(0.995)).await.unwrap();

        let total = svc.total_sales().await.unwrap();
        assert_eq!(format!("{total:.2}"), "4.00");
    }

    #[tokio::test]
    async fn total_sales_is_zero_on_empty_store() {
        let svc = service();
        assert_eq!(format!("{:.2}", svc.total_sales().await.unwrap()), "0.00");
    }

    #[tokio::test]
    async fn bulk_stock_levels_omit_sold_out_products() {
        let svc = service();
        svc.restock("gone", 1).await.unwrap();
        svc.restock("kept", 2).await.unwrap();
        svc.record_sale("gone", 1, None).await.unwrap();

        let levels = svc.stock_levels().await.unwrap();
        assert_eq!(levels, vec![("kept".to_string(), 2)]);
    }

    #[tokio::test]
    async fn strict_lookup_rejects_unknown_names() {
        let svc = service();
        let err = svc.stock_level("ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::NotFound)));
    }

    #[tokio::test]
    async fn lenient_lookup_answers_zero_for_unknown_names() {
        let svc = service_with(ServiceConfig {
            strict_stock_lookup: false,
            ..ServiceConfig::default()
        });
        assert_eq!(svc.stock_level("ghost").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn known_product_at_zero_stock_is_still_found() {
        let svc = service();
        svc.restock("egg", 1).await.unwrap();
        svc.record_sale("egg", 1, None).await.unwrap();

        assert_eq!(svc.stock_level("egg").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reset_clears_all_products() {
        let svc = service();
        svc.restock("egg", 10).await.unwrap();
        svc.record_sale("egg", 1, Some(3.0)).await.unwrap();

        svc.reset().await.unwrap();

        assert!(svc.stock_levels().await.unwrap().is_empty());
        assert_eq!(svc.total_sales().await.unwrap(), 0.0);
        assert!(matches!(
            svc.stock_level("egg").await.unwrap_err(),
            ServiceError::Domain(DomainError::NotFound)
        ));

        // Idempotent.
        svc.reset().await.unwrap();
    }
}
