use std::fmt;

use bson::oid::ObjectId;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::product::errors::ProductIdError;
use crate::product::errors::ReviewValidationError;

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub ObjectId);

impl ProductId {
    /// Generate a new store-compatible random ID.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parse a product ID from its hex representation.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid ObjectId
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        ObjectId::parse_str(s)
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single customer review, appended to a product's review sequence.
///
/// `review_id` and `date` are always generated server-side, never taken
/// from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: String,
    pub user: String,
    pub rating: f64,
    pub comment: String,
    pub date: DateTime<Utc>,
}

impl Review {
    /// Build a review from a validated submission, stamping id and date.
    pub fn new(command: CreateReviewCommand) -> Self {
        Self {
            review_id: Uuid::new_v4().to_string(),
            user: command.user,
            rating: command.rating,
            comment: command.comment,
            date: Utc::now(),
        }
    }
}

/// Command to append a review, with required-field validation at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewCommand {
    pub user: String,
    pub rating: f64,
    pub comment: String,
}

impl CreateReviewCommand {
    /// Validate a review submission.
    ///
    /// All three fields must be present; user and comment must be non-empty.
    ///
    /// # Errors
    /// * `MissingUser` - User absent or empty
    /// * `MissingRating` - Rating absent
    /// * `MissingComment` - Comment absent or empty
    pub fn new(
        user: Option<String>,
        rating: Option<f64>,
        comment: Option<String>,
    ) -> Result<Self, ReviewValidationError> {
        let user = user
            .filter(|u| !u.trim().is_empty())
            .ok_or(ReviewValidationError::MissingUser)?;
        let rating = rating.ok_or(ReviewValidationError::MissingRating)?;
        let comment = comment
            .filter(|c| !c.trim().is_empty())
            .ok_or(ReviewValidationError::MissingComment)?;

        Ok(Self {
            user,
            rating,
            comment,
        })
    }
}
