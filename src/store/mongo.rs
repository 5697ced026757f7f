use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use super::{parse_id, UserStore};
use crate::database::MongoDB;
use crate::models::{NewUser, User, UserDocument};
use crate::utils::AppError;

const COLLECTION: &str = "users";

pub struct MongoUserStore {
    db: MongoDB,
}

impl MongoUserStore {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.collection::<UserDocument>(COLLECTION)
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let document = UserDocument {
            id: ObjectId::new(),
            username: new_user.username().to_string(),
            email: new_user.email().to_string(),
        };

        self.collection().insert_one(&document).await?;

        Ok(User::from(document))
    }

    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection().find(doc! {}).await?;
        let documents: Vec<UserDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn update_by_id(&self, id: &str, new_user: NewUser) -> Result<Option<User>, AppError> {
        let object_id = parse_id(id)?;

        let updated = self
            .collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "username": new_user.username(),
                    "email": new_user.email(),
                } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.map(User::from))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_id(id)?;

        let deleted = self
            .collection()
            .find_one_and_delete(doc! { "_id": object_id })
            .await?;

        Ok(deleted.map(User::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.ping().await?;
        Ok(())
    }
}
