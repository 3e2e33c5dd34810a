use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;

pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateUserRequest>,
) -> Result<ApiSuccess<CreateUserResponseData>, ApiError> {
    state
        .user_service
        .register_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreateUserResponseData {
                    message: "User created successfully".to_string(),
                    result: user.into(),
                },
            )
        })
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateUserRequestError {
    #[error("Email and password are required")]
    MissingFields,

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseCreateUserRequestError> {
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or(ParseCreateUserRequestError::MissingFields)?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or(ParseCreateUserRequestError::MissingFields)?;

        let email = EmailAddress::new(email)?;
        Ok(RegisterUserCommand::new(email, password))
    }
}

impl From<ParseCreateUserRequestError> for ApiError {
    fn from(err: ParseCreateUserRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponseData {
    pub message: String,
    pub result: RegisteredUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUserData {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for RegisteredUserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            password_hash: user.password_hash.clone(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_into_command_missing_fields() {
        let request = CreateUserRequest {
            email: Some("a@x.com".to_string()),
            password: None,
        };
        assert!(matches!(
            request.try_into_command(),
            Err(ParseCreateUserRequestError::MissingFields)
        ));

        let request = CreateUserRequest {
            email: None,
            password: Some("pw".to_string()),
        };
        assert!(matches!(
            request.try_into_command(),
            Err(ParseCreateUserRequestError::MissingFields)
        ));
    }

    #[test]
    fn test_try_into_command_invalid_email() {
        let request = CreateUserRequest {
            email: Some("not-an-email".to_string()),
            password: Some("pw".to_string()),
        };
        assert!(matches!(
            request.try_into_command(),
            Err(ParseCreateUserRequestError::Email(_))
        ));
    }

    #[test]
    fn test_try_into_command_valid() {
        let request = CreateUserRequest {
            email: Some("a@x.com".to_string()),
            password: Some("pw".to_string()),
        };
        let command = request.try_into_command().unwrap();
        assert_eq!(command.email.as_str(), "a@x.com");
        assert_eq!(command.password, "pw");
    }
}
