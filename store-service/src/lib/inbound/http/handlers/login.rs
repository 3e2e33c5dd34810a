use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let (email, password) = body
        .into_fields()
        .ok_or_else(|| ApiError::BadRequest("Email and password are required".to_string()))?;

    // An address that does not even parse cannot belong to a registered user
    let email = EmailAddress::new(email)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(ApiError::from)?;

    let claims = auth::Claims::for_user(user.id, user.email.as_str());

    let result = state
        .authenticator
        .authenticate(&password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid password".to_string())
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: result.access_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
    password: Option<String>,
}

impl LoginRequestBody {
    fn into_fields(self) -> Option<(String, String)> {
        let email = self.email.filter(|e| !e.trim().is_empty())?;
        let password = self.password.filter(|p| !p.is_empty())?;
        Some((email, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_fields_requires_both() {
        let body = LoginRequestBody {
            email: Some("a@x.com".to_string()),
            password: None,
        };
        assert!(body.into_fields().is_none());

        let body = LoginRequestBody {
            email: None,
            password: Some("pw".to_string()),
        };
        assert!(body.into_fields().is_none());

        let body = LoginRequestBody {
            email: Some("  ".to_string()),
            password: Some("pw".to_string()),
        };
        assert!(body.into_fields().is_none());
    }

    #[test]
    fn test_response_uses_camel_case_token_key() {
        let data = LoginResponseData {
            access_token: "abc".to_string(),
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["accessToken"], "abc");
    }
}
