//! Adapters for authentication concerns

mod password_hasher;
mod token_signer;

pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use token_signer::{TokenClaims, TokenError, TokenSigner};
