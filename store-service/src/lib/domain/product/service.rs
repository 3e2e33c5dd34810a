use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Map;
use serde_json::Value;

use crate::domain::product::models::CreateReviewCommand;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::Review;
use crate::product::errors::ProductError;
use crate::product::ports::ProductRepository;
use crate::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
///
/// Concrete implementation of ProductServicePort with dependency injection.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    /// Create a new product service with an injected repository.
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn list_products(&self) -> Result<Vec<Value>, ProductError> {
        self.repository.list_all().await
    }

    async fn create_product(&self, payload: Map<String, Value>) -> Result<Value, ProductError> {
        self.repository.insert(payload).await
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError> {
        self.repository.delete_by_id(id).await
    }

    async fn add_review(
        &self,
        id: &ProductId,
        command: CreateReviewCommand,
    ) -> Result<Review, ProductError> {
        let review = Review::new(command);
        self.repository.push_review(id, &review).await?;
        Ok(review)
    }

    async fn list_reviews(&self, id: &ProductId) -> Result<Vec<Review>, ProductError> {
        self.repository
            .find_reviews(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))
    }
}
