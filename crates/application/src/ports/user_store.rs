//! User account storage port

use async_trait::async_trait;
use bson::oid::ObjectId;
use domain::User;

use crate::error::ApplicationError;

use super::reports::{DeleteReport, InsertReport, UpdateReport};

/// Port for user account storage operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// List every account, stored password hashes included
    async fn list(&self) -> Result<Vec<User>, ApplicationError>;

    /// Find an account by its identifier
    async fn get(&self, id: ObjectId) -> Result<Option<User>, ApplicationError>;

    /// Find an account by email
    ///
    /// Backs both the login lookup and the pre-insert existence check that
    /// stands in for a unique index.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApplicationError>;

    /// Insert a new account
    async fn insert(&self, user: &User) -> Result<InsertReport, ApplicationError>;

    /// Set the `name` field of the account with the given id
    ///
    /// This is the only partial update the API performs; absent input
    /// writes a null.
    async fn update_name(
        &self,
        id: ObjectId,
        name: Option<&str>,
    ) -> Result<UpdateReport, ApplicationError>;

    /// Delete the account with the given id
    async fn delete(&self, id: ObjectId) -> Result<DeleteReport, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn UserStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn UserStore>();
    }
}
