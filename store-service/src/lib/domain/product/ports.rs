use async_trait::async_trait;
use serde_json::Map;
use serde_json::Value;

use crate::domain::product::models::CreateReviewCommand;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::Review;
use crate::product::errors::ProductError;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Retrieve all product documents.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_products(&self) -> Result<Vec<Value>, ProductError>;

    /// Insert a caller-supplied product payload verbatim.
    ///
    /// # Returns
    /// The stored document, including its generated id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, payload: Map<String, Value>) -> Result<Value, ProductError>;

    /// Delete a product by id.
    ///
    /// # Errors
    /// * `NotFound` - No product with this id
    /// * `DatabaseError` - Database operation failed
    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError>;

    /// Append a review to a product's review sequence.
    ///
    /// # Returns
    /// The stored review with server-generated id and timestamp
    ///
    /// # Errors
    /// * `NotFound` - No product with this id
    /// * `DatabaseError` - Database operation failed
    async fn add_review(
        &self,
        id: &ProductId,
        command: CreateReviewCommand,
    ) -> Result<Review, ProductError>;

    /// Retrieve a product's reviews in insertion order.
    ///
    /// # Errors
    /// * `NotFound` - No product with this id
    /// * `DatabaseError` - Database operation failed
    async fn list_reviews(&self, id: &ProductId) -> Result<Vec<Review>, ProductError>;
}

/// Persistence operations for product documents.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Insert a product payload and return the stored document.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, payload: Map<String, Value>) -> Result<Value, ProductError>;

    /// Retrieve all product documents.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Value>, ProductError>;

    /// Remove a product from storage.
    ///
    /// # Errors
    /// * `NotFound` - No product with this id
    /// * `DatabaseError` - Database operation failed
    async fn delete_by_id(&self, id: &ProductId) -> Result<(), ProductError>;

    /// Atomically append a review to a product's review array.
    ///
    /// # Errors
    /// * `NotFound` - No product with this id
    /// * `DatabaseError` - Database operation failed
    async fn push_review(&self, id: &ProductId, review: &Review) -> Result<(), ProductError>;

    /// Retrieve a product's review array.
    ///
    /// # Returns
    /// None if the product does not exist; an empty vector if it has no reviews
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_reviews(&self, id: &ProductId) -> Result<Option<Vec<Review>>, ProductError>;
}
