//! MongoDB comment store implementation

use application::{
    error::ApplicationError,
    ports::{CommentStore, DeleteReport, InsertReport, UpdateReport},
};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use domain::Comment;
use futures::TryStreamExt;
use mongodb::Collection;
use tracing::{debug, instrument};

use super::{MongoStore, map_store_error};

const COLLECTION: &str = "comments";

/// MongoDB-backed comment store
#[derive(Debug, Clone)]
pub struct MongoCommentStore {
    collection: Collection<Comment>,
}

impl MongoCommentStore {
    /// Create a store over the shared client
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl CommentStore for MongoCommentStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Comment>, ApplicationError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_store_error)?;

        let comments: Vec<Comment> = cursor.try_collect().await.map_err(map_store_error)?;
        debug!(count = comments.len(), "Listed comments");
        Ok(comments)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: ObjectId) -> Result<Option<Comment>, ApplicationError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_store_error)
    }

    #[instrument(skip(self, comment), fields(name = %comment.name))]
    async fn insert(&self, comment: &Comment) -> Result<InsertReport, ApplicationError> {
        let result = self
            .collection
            .insert_one(comment)
            .await
            .map_err(map_store_error)?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            ApplicationError::Internal("store returned a non-ObjectId identifier".to_string())
        })?;

        debug!(id = %inserted_id, "Inserted comment");
        Ok(InsertReport { inserted_id })
    }

    #[instrument(skip(self, comment), fields(id = %id))]
    async fn replace(
        &self,
        id: ObjectId,
        comment: &Comment,
    ) -> Result<UpdateReport, ApplicationError> {
        let update = doc! {
            "$set": {
                "name": &comment.name,
                "comment": &comment.comment,
                "date": &comment.date,
            }
        };

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await
            .map_err(map_store_error)?;

        debug!(matched = result.matched_count, "Replaced comment");
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

        debug!(deleted = result.deleted_count, "Deleted comment");
        Ok(DeleteReport {
            deleted_count: result.deleted_count,
        })
    }
}
