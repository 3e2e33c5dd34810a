use thiserror::Error;

/// Error for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("Invalid ObjectId format: {0}")]
    InvalidFormat(String),
}

/// Error for review submission validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewValidationError {
    #[error("Review user is required")]
    MissingUser,

    #[error("Review rating is required")]
    MissingRating,

    #[error("Review comment is required")]
    MissingComment,
}

/// Top-level error for all product-related operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid product ID: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error("Invalid review: {0}")]
    InvalidReview(#[from] ReviewValidationError),

    // Domain-level errors
    #[error("Product not found")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ProductError {
    fn from(err: anyhow::Error) -> Self {
        ProductError::Unknown(err.to_string())
    }
}
