//! Comment storage port

use async_trait::async_trait;
use bson::oid::ObjectId;
use domain::Comment;

use crate::error::ApplicationError;

use super::reports::{DeleteReport, InsertReport, UpdateReport};

/// Port for comment storage operations
///
/// Comments are a direct passthrough: no duplicate guard, no existence
/// checks beyond what the store itself reports.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// List every comment
    async fn list(&self) -> Result<Vec<Comment>, ApplicationError>;

    /// Find a comment by its identifier
    async fn get(&self, id: ObjectId) -> Result<Option<Comment>, ApplicationError>;

    /// Insert a new comment
    async fn insert(&self, comment: &Comment) -> Result<InsertReport, ApplicationError>;

    /// Replace the fields of the comment with the given id
    async fn replace(
        &self,
        id: ObjectId,
        comment: &Comment,
    ) -> Result<UpdateReport, ApplicationError>;

    /// Delete the comment with the given id
    async fn delete(&self, id: ObjectId) -> Result<DeleteReport, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn CommentStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CommentStore>();
    }
}
