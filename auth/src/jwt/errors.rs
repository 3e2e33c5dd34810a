use thiserror::Error;

/// Error type for JWT operations.
///
/// Variants stay distinct so the server can log the precise cause;
/// the HTTP layer collapses them into a single generic rejection.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
