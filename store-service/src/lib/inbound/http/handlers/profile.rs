use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Protected route: only reachable once the auth middleware has verified
/// the bearer token and injected the claims.
pub async fn profile(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<ProfileResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        ProfileResponseData {
            success: true,
            message: "Token is valid".to_string(),
            user: ProfileClaimsData::from(&user),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub success: bool,
    pub message: String,
    pub user: ProfileClaimsData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileClaimsData {
    pub user_id: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl From<&AuthenticatedUser> for ProfileClaimsData {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            user_id: user.user_id.clone(),
            email: user.email.clone(),
            iat: user.issued_at,
            exp: user.expires_at,
        }
    }
}
