//! Domain layer: the record kinds stored in the document store
//!
//! Three independent collections (universities, comments, users) with no
//! cross-collection referential integrity. Records are loosely typed
//! documents identified by a store-assigned `ObjectId`.

pub mod entities;
pub mod errors;

pub use bson::oid::ObjectId;
pub use entities::{Comment, University, User};
pub use errors::DomainError;
