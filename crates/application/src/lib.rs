//! Application layer: storage ports and the error taxonomy
//!
//! Handlers depend on the ports defined here; the infrastructure crate
//! supplies the document-store implementations.

pub mod error;
pub mod ports;

pub use error::ApplicationError;
pub use ports::{
    CommentStore, DeleteReport, InsertReport, UniversityStore, UpdateReport, UserStore,
};
