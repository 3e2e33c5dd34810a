use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

/// Inserts the caller payload verbatim; there is no product schema.
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Value>,
) -> Result<ApiSuccess<CreateProductResponseData>, ApiError> {
    let Value::Object(payload) = payload else {
        return Err(ApiError::BadRequest(
            "Product payload must be a JSON object".to_string(),
        ));
    };

    state
        .product_service
        .create_product(payload)
        .await
        .map_err(ApiError::from)
        .map(|product| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreateProductResponseData {
                    message: "Product created successfully".to_string(),
                    result: product,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProductResponseData {
    pub message: String,
    pub result: Value,
}
