use axum::{
    Router,
    routing::{get, post},
};

pub mod sales;
pub mod stocks;
pub mod system;

/// Router for the versioned inventory/sales surface.
pub fn router() -> Router {
    Router::new()
        .route(
            "/v1/stocks",
            post(stocks::restock)
                .get(stocks::get_all)
                .delete(stocks::reset),
        )
        .route("/v1/stocks/:name", get(stocks::get_one))
        .route("/v1/sales", post(sales::record).get(sales::total))
}
