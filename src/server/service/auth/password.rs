//! Argon2 password hashing.
//!
//! The `spawn_*` variants run the hash on tokio's blocking pool and are what request
//! handlers call. The plain functions do the work on the current thread.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC string suitable for storage
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks a password against a stored PHC string.
///
/// A hash that cannot be parsed is an internal error rather than a mismatch.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalError)` - Stored hash is malformed
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::InternalError(format!("Malformed password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Runs `hash_password` on the blocking thread pool.
pub async fn spawn_hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Runs `verify_password` on the blocking thread pool.
pub async fn spawn_verify_password(password: String, stored_hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))?
}
