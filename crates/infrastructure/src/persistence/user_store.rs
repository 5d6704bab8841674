//! MongoDB user store implementation

use application::{
    error::ApplicationError,
    ports::{DeleteReport, InsertReport, UpdateReport, UserStore},
};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use domain::User;
use futures::TryStreamExt;
use mongodb::Collection;
use tracing::{debug, instrument};

use super::{MongoStore, map_store_error};

const COLLECTION: &str = "users";

/// MongoDB-backed user store
#[derive(Debug, Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    /// Create a store over the shared client
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<User>, ApplicationError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_store_error)?;

        let users: Vec<User> = cursor.try_collect().await.map_err(map_store_error)?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: ObjectId) -> Result<Option<User>, ApplicationError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_store_error)
    }

    #[instrument(skip(self, email))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApplicationError> {
        let user = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .map_err(map_store_error)?;

        debug!(found = user.is_some(), "Looked up user by email");
        Ok(user)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, user: &User) -> Result<InsertReport, ApplicationError> {
        let result = self
            .collection
            .insert_one(user)
            .await
            .map_err(map_store_error)?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            ApplicationError::Internal("store returned a non-ObjectId identifier".to_string())
        })?;

        debug!(id = %inserted_id, "Inserted user");
        Ok(InsertReport { inserted_id })
    }

    #[instrument(skip(self, name), fields(id = %id))]
    async fn update_name(
        &self,
        id: ObjectId,
        name: Option<&str>,
    ) -> Result<UpdateReport, ApplicationError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "name": name } })
            .await
            .map_err(map_store_error)?;

        debug!(matched = result.matched_count, "Updated user name");
        Ok(UpdateReport {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<DeleteReport, ApplicationError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(map_store_error)?;

        debug!(deleted = result.deleted_count, "Deleted user");
        Ok(DeleteReport {
            deleted_count: result.deleted_count,
        })
    }
}
