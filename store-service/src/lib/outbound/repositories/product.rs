use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use bson::Bson;
use bson::Document;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::Database;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::domain::product::models::ProductId;
use crate::domain::product::models::Review;
use crate::domain::product::ports::ProductRepository;
use crate::product::errors::ProductError;

const COLLECTION: &str = "products";
const REVIEWS_FIELD: &str = "reviews";

/// Stored representation of a review subdocument.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewDocument {
    review_id: String,
    user: String,
    rating: f64,
    comment: String,
    date: bson::DateTime,
}

impl From<&Review> for ReviewDocument {
    fn from(review: &Review) -> Self {
        Self {
            review_id: review.review_id.clone(),
            user: review.user.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            date: bson::DateTime::from_chrono(review.date),
        }
    }
}

impl From<ReviewDocument> for Review {
    fn from(document: ReviewDocument) -> Self {
        Self {
            review_id: document.review_id,
            user: document.user,
            rating: document.rating,
            comment: document.comment,
            date: document.date.to_chrono(),
        }
    }
}

/// Products are schemaless pass-through documents, so the collection is
/// typed over raw BSON documents rather than a fixed record.
pub struct MongoProductRepository {
    collection: Collection<Document>,
}

impl MongoProductRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn insert(&self, payload: Map<String, Value>) -> Result<Value, ProductError> {
        let mut document =
            bson::to_document(&payload).map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if !document.contains_key("_id") {
            document.insert("_id", ObjectId::new());
        }

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(document_to_json(document))
    }

    async fn list_all(&self) -> Result<Vec<Value>, ProductError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(document_to_json).collect())
    }

    async fn delete_by_id(&self, id: &ProductId) -> Result<(), ProductError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.0 })
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn push_review(&self, id: &ProductId, review: &Review) -> Result<(), ProductError> {
        let review_bson = bson::to_bson(&ReviewDocument::from(review))
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        // $push is atomic on the array; it also creates the array on first use
        let result = self
            .collection
            .update_one(
                doc! { "_id": id.0 },
                doc! { "$push": { REVIEWS_FIELD: review_bson } },
            )
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn find_reviews(&self, id: &ProductId) -> Result<Option<Vec<Review>>, ProductError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.0 })
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        let Some(document) = document else {
            return Ok(None);
        };

        let reviews = match document.get_array(REVIEWS_FIELD) {
            Ok(items) => items
                .iter()
                .map(|item| {
                    bson::from_bson::<ReviewDocument>(item.clone())
                        .map(Review::from)
                        .map_err(|e| ProductError::DatabaseError(e.to_string()))
                })
                .collect::<Result<Vec<Review>, ProductError>>()?,
            // A product never reviewed has no array yet
            Err(_) => Vec::new(),
        };

        Ok(Some(reviews))
    }
}

/// Render a stored document as plain JSON: ObjectIds become hex strings and
/// BSON dates become RFC 3339 strings instead of extended-JSON wrappers.
fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Document(document) => document_to_json(document),
        other => other.into_relaxed_extjson(),
    }
}
