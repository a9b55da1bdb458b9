use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use tracing::error;

/// Failure raised while hashing or parsing a stored credential.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("failed to hash credential: {0}")]
    Hash(String),
    #[error("stored credential hash is malformed: {0}")]
    MalformedHash(String),
}

pub fn hash_credential(plain: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|err| {
            error!(error = %err, "argon2 hash_password error");
            CredentialError::Hash(err.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_credential(plain: &str, hash: &str) -> Result<bool, CredentialError> {
    let parsed = PasswordHash::new(hash).map_err(|err| {
        error!(error = %err, "argon2 parse hash error");
        CredentialError::MalformedHash(err.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
