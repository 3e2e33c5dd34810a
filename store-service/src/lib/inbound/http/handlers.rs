use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::product::errors::ProductError;
use crate::user::errors::UserError;

pub mod create_product;
pub mod create_review;
pub mod create_user;
pub mod delete_product;
pub mod list_products;
pub mod list_reviews;
pub mod list_users;
pub mod login;
pub mod profile;
pub mod root;

/// Request body extractor whose rejections land in the 400 bucket instead
/// of axum's default 422, keeping malformed and wrong-typed bodies in the
/// same validation taxonomy as missing fields.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Successful API response: a status code and a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                // Details stay in the server log; the caller sees a generic 500
                tracing::error!(error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiErrorBody { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFoundByEmail(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidEmail(_) => ApiError::BadRequest(err.to_string()),
            UserError::PasswordHash(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProductError::InvalidProductId(_) | ProductError::InvalidReview(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ProductError::DatabaseError(_) | ProductError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::errors::ProductIdError;
    use crate::product::errors::ReviewValidationError;

    #[test]
    fn test_duplicate_email_maps_to_bad_request() {
        let err = ApiError::from(UserError::EmailAlreadyExists("a@x.com".to_string()));
        assert_eq!(err, ApiError::BadRequest("User already exists".to_string()));
    }

    #[test]
    fn test_unknown_email_maps_to_not_found() {
        let err = ApiError::from(UserError::NotFoundByEmail("a@x.com".to_string()));
        assert_eq!(err, ApiError::NotFound("User not found".to_string()));
    }

    #[test]
    fn test_missing_product_maps_to_not_found() {
        let err = ApiError::from(ProductError::NotFound("abc".to_string()));
        assert_eq!(err, ApiError::NotFound("Product not found".to_string()));
    }

    #[test]
    fn test_invalid_product_id_maps_to_bad_request() {
        let err = ApiError::from(ProductError::InvalidProductId(ProductIdError::InvalidFormat(
            "nope".to_string(),
        )));
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_invalid_review_maps_to_bad_request() {
        let err = ApiError::from(ProductError::InvalidReview(
            ReviewValidationError::MissingUser,
        ));
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_database_error_surfaces_as_generic_500() {
        let response =
            ApiError::from(UserError::DatabaseError("connection refused".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
