use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::Review;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<ReviewData>>, ApiError> {
    let product_id = ProductId::from_string(&id).map_err(ProductError::from)?;

    state
        .product_service
        .list_reviews(&product_id)
        .await
        .map_err(ApiError::from)
        .map(|reviews| {
            ApiSuccess::new(
                StatusCode::OK,
                reviews.iter().map(ReviewData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    pub review_id: String,
    pub user: String,
    pub rating: f64,
    pub comment: String,
    pub date: DateTime<Utc>,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            review_id: review.review_id.clone(),
            user: review.user.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            date: review.date,
        }
    }
}
