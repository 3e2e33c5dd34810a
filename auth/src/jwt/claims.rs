use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token validity window: one hour from issuance.
pub const TOKEN_TTL_HOURS: i64 = 1;

/// Identity claims carried by an access token.
///
/// Self-contained: the token embeds who the bearer is and how long the
/// token is good for, all under the server signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email address of the authenticated user
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp), always `iat` + 1 hour
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated user, expiring one hour from now.
    pub fn for_user(user_id: impl ToString, email: impl ToString) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(TOKEN_TTL_HOURS);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user_sets_identity() {
        let claims = Claims::for_user("user123", "alice@example.com");

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "alice@example.com");
    }

    #[test]
    fn test_for_user_expires_in_one_hour() {
        let claims = Claims::for_user("user123", "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }
}
