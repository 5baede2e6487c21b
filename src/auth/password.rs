//! Credential verification: salted password hashing and comparison

use tracing::error;

use crate::common::ApiError;

/// bcrypt work factor. Must remain constant across the deployment so
/// verification latency stays bounded and predictable.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a per-call random salt.
///
/// The salt is embedded in the returned hash string, so hashing the same
/// password twice yields different strings that both verify.
pub fn hash_password(plaintext: &str) -> Result<String, ApiError> {
    bcrypt::hash(plaintext, HASH_COST).map_err(|e| {
        error!(error = %e, "Password hashing failed");
        ApiError::InternalServer("Password hashing failed".to_string())
    })
}

/// Verify a plaintext password against a stored hash.
///
/// Returns false on mismatch AND on a malformed stored hash: the login path
/// must not be able to distinguish a wrong password from a corrupt record.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}
