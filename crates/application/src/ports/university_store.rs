//! University storage port

use async_trait::async_trait;
use bson::oid::ObjectId;
use domain::University;

use crate::error::ApplicationError;

use super::reports::{DeleteReport, InsertReport, UpdateReport};

/// Port for university storage operations
#[async_trait]
pub trait UniversityStore: Send + Sync {
    /// List every university
    async fn list(&self) -> Result<Vec<University>, ApplicationError>;

    /// Find a university by its identifier
    async fn get(&self, id: ObjectId) -> Result<Option<University>, ApplicationError>;

    /// Find a record matching `candidate` on all six required fields
    ///
    /// This is the weak duplicate guard; `session` and the identifier are
    /// not part of the match.
    async fn find_matching(
        &self,
        candidate: &University,
    ) -> Result<Option<University>, ApplicationError>;

    /// Insert a new university
    async fn insert(&self, university: &University) -> Result<InsertReport, ApplicationError>;

    /// Replace the six required fields of the record with the given id
    ///
    /// `session` is left untouched by a replace.
    async fn replace(
        &self,
        id: ObjectId,
        university: &University,
    ) -> Result<UpdateReport, ApplicationError>;

    /// Delete the record with the given id, reporting how many were removed
    async fn delete(&self, id: ObjectId) -> Result<DeleteReport, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time verification that the trait is object-safe
    fn _assert_object_safe(_: &dyn UniversityStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn UniversityStore>();
    }
}
