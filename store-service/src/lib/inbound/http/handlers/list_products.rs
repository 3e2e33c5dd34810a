use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<Value>>, ApiError> {
    state
        .product_service
        .list_products()
        .await
        .map_err(ApiError::from)
        .map(|products| ApiSuccess::new(StatusCode::OK, products))
}
