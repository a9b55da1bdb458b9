//! Account registry and session handling.

mod credentials;
pub mod domain;
mod store;

#[cfg(test)]
mod tests;

pub use credentials::{hash_credential, verify_credential, CredentialError};
pub use domain::{Account, AccountCandidate, AccountId, AccountKind};
pub use store::{IdentityError, IdentityStore};
