use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::Database;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const COLLECTION: &str = "users";

/// Stored representation of a user document.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    email: String,
    password_hash: String,
    created_at: bson::DateTime,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            email: user.email.as_str().to_string(),
            password_hash: user.password_hash.clone(),
            created_at: bson::DateTime::from_chrono(user.created_at),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = UserError;

    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(document.id),
            email: EmailAddress::new(document.email)?,
            password_hash: document.password_hash,
            created_at: document.created_at.to_chrono(),
        })
    }
}

pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        self.collection
            .insert_one(UserDocument::from(&user))
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let document = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        document.map(User::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let documents: Vec<UserDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        documents.into_iter().map(User::try_from).collect()
    }
}
