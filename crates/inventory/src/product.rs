use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The unit of inventory: a named product holding a stock count and a
/// cumulative sales-revenue accumulator.
///
/// `name` is the business key and is immutable after creation. `id` and the
/// timestamps are storage-internal and never appear on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub stock: i64,
    pub sales: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a fresh product with the given opening stock and no revenue.
    pub fn new(name: impl Into<String>, stock: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            stock,
            sales: 0.0,
            created_at: now,
            updated_at: now,
        }
    }
}
