//! MongoDB university store implementation

use application::{
    error::ApplicationError,
    ports::{DeleteReport, InsertReport, UniversityStore, UpdateReport},
};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use domain::University;
use futures::TryStreamExt;
use mongodb::Collection;
use tracing::{debug, instrument};

use super::{MongoStore, map_store_error};

const COLLECTION: &str = "universities";

/// MongoDB-backed university store
#[derive(Debug, Clone)]
pub struct MongoUniversityStore {
    collection: Collection<University>,
}

impl MongoUniversityStore {
    /// Create a store over the shared client
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UniversityStore for MongoUniversityStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<University>, ApplicationError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_store_error)?;

        let universities: Vec<University> = cursor.try_collect().await.map_err(map_store_error)?;
        debug!(count = universities.len(), "Listed universities");
        Ok(universities)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: ObjectId) -> Result<Option<University>, ApplicationError> {
        let university = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_store_error)?;

        debug!(found = university.is_some(), "Looked up university");
        Ok(university)
    }

    #[instrument(skip(self, candidate))]
    async fn find_matching(
        &self,
        candidate: &University,
    ) -> Result<Option<University>, ApplicationError> {
        // Weak duplicate guard: all six required fields at once, session
        // and identifier excluded.
        let filter = doc! {
            "name": &candidate.name,
            "location": &candidate.location,
            "website": &candidate.website,
            "image": &candidate.image,
            "description": &candidate.description,
            "score": candidate.score,
        };

        self.collection
            .find_one(filter)
            .await
            .map_err(map_store_error)
    }

    #[instrument(skip(self, university), fields(name = %university.name))]
    async fn insert(&self, university: &University) -> Result<InsertReport, ApplicationError> {
        let result = self
            .collection
            .insert_one(university)
            .await
            .map_err(map_store_error)?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            ApplicationError::Internal("store returned a non-ObjectId identifier".to_string())
        })?;

        debug!(id = %inserted_id, "Inserted university");
        Ok(InsertReport { inserted_id })
    }

    #[instrument(skip(self, university), fields(id = %id))]
    async fn replace(
        &self,
        id: ObjectId,
        university: &University,
    ) -> Result<UpdateReport, ApplicationError> {
        // Full-field replace of the six required fields; session is not
        // touched by a replace.
        let update = doc! {
            "$set": {
                "name": &university.name,
                "location": &university.location,
                "website": &university.website,
                "image": &university.image,
                "description": &university.description,
                "score": university.score,
            }
        };

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await
            .map_err(map_store_error)?;

        debug!(matched = result.matched_count, "Replaced university");
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

        debug!(deleted = result.deleted_count, "Deleted university");
        Ok(DeleteReport {
            deleted_count: result.deleted_count,
        })
    }
}
