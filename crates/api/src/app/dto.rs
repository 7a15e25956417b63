//! Request/response DTOs and JSON mapping helpers.

use serde::{Deserialize, Serialize};

use crate::app::services::{RestockReceipt, SaleReceipt};

fn default_amount() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct RestockRequest {
    pub name: String,
    /// Unit count, defaults to 1 when omitted.
    #[serde(default = "default_amount")]
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct SaleRequest {
    pub name: String,
    #[serde(default = "default_amount")]
    pub amount: i64,
    /// Unit price; absent means the sale has no revenue impact.
    pub price: Option<f64>,
}

/// `{name, amount}` where `amount` is the resulting stock level.
#[derive(Debug, Serialize)]
pub struct RestockResponse {
    pub name: String,
    pub amount: i64,
}

impl From<RestockReceipt> for RestockResponse {
    fn from(receipt: RestockReceipt) -> Self {
        Self {
            name: receipt.name,
            amount: receipt.stock,
        }
    }
}

/// Echo of the sale request; `price` appears only when the caller sent one.
#[derive(Debug, Serialize)]
pub struct SaleResponse {
    pub name: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl From<SaleReceipt> for SaleResponse {
    fn from(receipt: SaleReceipt) -> Self {
        Self {
            name: receipt.name,
            amount: receipt.amount,
            price: receipt.price,
        }
    }
}

/// `{name: stock, ...}` — dynamic keys, so a plain object rather than a
/// derived struct. Preserves the order the levels come in.
pub fn stock_map(levels: impl IntoIterator<Item = (String, i64)>) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (name, stock) in levels {
        map.insert(name, serde_json::Value::from(stock));
    }
    serde_json::Value::Object(map)
}
