use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// POST /v1/stocks — replenish (or implicitly create) a product.
pub async fn restock(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RestockRequest>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::invalid_body();
    };

    match services.inventory.restock(&body.name, body.amount).await {
        Ok(receipt) => (StatusCode::OK, Json(dto::RestockResponse::from(receipt))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// GET /v1/stocks/:name — stock level for one product.
pub async fn get_one(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.inventory.stock_level(&name).await {
        Ok(stock) => (StatusCode::OK, Json(dto::stock_map([(name, stock)]))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// GET /v1/stocks — every product with stock > 0.
pub async fn get_all(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.inventory.stock_levels().await {
        Ok(levels) => (StatusCode::OK, Json(dto::stock_map(levels))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// DELETE /v1/stocks — remove every product.
pub async fn reset(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.inventory.reset().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
