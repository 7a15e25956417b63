use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// POST /v1/sales — record a sale against a product.
pub async fn record(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::SaleRequest>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::invalid_body();
    };

    match services
        .inventory
        .record_sale(&body.name, body.amount, body.price)
        .await
    {
        Ok(receipt) => (StatusCode::OK, Json(dto::SaleResponse::from(receipt))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// GET /v1/sales — aggregate revenue, fixed two decimal places.
pub async fn total(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.inventory.total_sales().await {
        Ok(total) => {
            (StatusCode::OK, Json(json!({"sales": format!("{total:.2}")}))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
