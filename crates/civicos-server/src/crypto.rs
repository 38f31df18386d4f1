use thiserror::Error;

/// bcrypt work factor for citizen passwords.
pub const BCRYPT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hash a citizen password on the blocking pool.
pub async fn hash_password(password: String) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;
    Ok(hashed)
}

/// Check `password` against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await?;
    match outcome {
        Ok(valid) => Ok(valid),
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash is not valid bcrypt");
            Ok(false)
        }
    }
}
