//! Postgres-backed product store.
//!
//! ## Concurrency
//!
//! Both mutations compile down to one SQL statement each, so per-name
//! serialization comes from Postgres row locking plus the unique constraint
//! on `name`:
//!
//! - `upsert_restock` is `INSERT .. ON CONFLICT (name) DO UPDATE SET
//!   stock = stock + excluded.stock .. RETURNING`. Concurrent first-restocks
//!   of a new name converge on a single row instead of duplicating it.
//! - `apply_sale` is a conditional `UPDATE .. WHERE name = $1 AND
//!   stock >= $2 .. RETURNING`; zero affected rows means the sale did not
//!   qualify (unknown product or insufficient stock) and nothing changed.
//!
//! ## Thread safety
//!
//! `PostgresProductStore` is `Send + Sync`; all operations go through the
//! SQLx connection pool.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use stockbook_inventory::Product;

use crate::error::StoreError;
use crate::product_store::ProductStore;
use crate::sale_revenue;

#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the embedded schema migrations for this store.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn row_to_product(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        stock: row.try_get("stock")?,
        sales: row.try_get("sales")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self), err)]
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, stock, sales, created_at, updated_at
            FROM products
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_product).transpose()?)
    }

    #[instrument(skip(self), err)]
    async fn upsert_restock(&self, name: &str, amount: i64) -> Result<Product, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (id, name, stock, sales)
            VALUES ($1, $2, $3, 0)
            ON CONFLICT (name) DO UPDATE
                SET stock = products.stock + excluded.stock,
                    updated_at = now()
            RETURNING id, name, stock, sales, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(name)
        .bind(amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_product(&row)?)
    }

    #[instrument(skip(self), err)]
    async fn apply_sale(
        &self,
        name: &str,
        amount: i64,
        price: Option<f64>,
    ) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE products
            SET stock = stock - $2,
                sales = sales + $3,
                updated_at = now()
            WHERE name = $1 AND stock >= $2
            RETURNING id, name, stock, sales, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(amount)
        .bind(sale_revenue(amount, price))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_product).transpose()?)
    }

    #[instrument(skip(self), err)]
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, stock, sales, created_at, updated_at
            FROM products
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            products.push(row_to_product(row)?);
        }
        Ok(products)
    }

    #[instrument(skip(self), err)]
    async fn delete_all(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
