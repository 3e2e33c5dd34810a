use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::product::models::CreateReviewCommand;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<CreateReviewRequest>,
) -> Result<ApiSuccess<CreateReviewResponseData>, ApiError> {
    let product_id = ProductId::from_string(&id).map_err(ProductError::from)?;
    let command = body.try_into_command().map_err(ProductError::from)?;

    state
        .product_service
        .add_review(&product_id, command)
        .await
        .map_err(ApiError::from)
        .map(|review| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreateReviewResponseData {
                    message: "Review added successfully".to_string(),
                    review_id: review.review_id,
                },
            )
        })
}

/// HTTP request body for submitting a review (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateReviewRequest {
    user: Option<String>,
    rating: Option<f64>,
    comment: Option<String>,
}

impl CreateReviewRequest {
    fn try_into_command(
        self,
    ) -> Result<CreateReviewCommand, crate::product::errors::ReviewValidationError> {
        CreateReviewCommand::new(self.user, self.rating, self.comment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewResponseData {
    pub message: String,
    pub review_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_into_command_missing_rating() {
        let request = CreateReviewRequest {
            user: Some("alice".to_string()),
            rating: None,
            comment: Some("ok".to_string()),
        };
        assert!(request.try_into_command().is_err());
    }

    #[test]
    fn test_response_uses_camel_case_review_id() {
        let data = CreateReviewResponseData {
            message: "Review added successfully".to_string(),
            review_id: "rid-1".to_string(),
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["reviewId"], "rid-1");
    }
}
