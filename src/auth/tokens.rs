//! Token pair issuance and verification for the session layer
//!
//! Access and refresh tokens are both HS256 JWTs carrying the user identifier
//! in the `sub` claim, signed with separate secrets and independent expiries.
//! Expiry is evaluated lazily at verification time; there is no background
//! sweep.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use super::models::Claims;
use crate::common::{generate_raw_id, AuthConfig};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
    #[error("token verification failed: {0}")]
    Verify(#[source] jsonwebtoken::errors::Error),
}

/// A freshly issued access/refresh token pair.
///
/// Transient: only the refresh token's value is persisted, on the user row.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

fn sign(user_id: &str, secret: &str, ttl_secs: u64) -> Result<String, TokenError> {
    let exp = (Utc::now() + Duration::seconds(ttl_secs as i64)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        exp,
        jti: generate_raw_id(8),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Encode)
}

fn verify(token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(TokenError::Verify)
}

/// Issue a new access/refresh pair for the given user identifier.
pub fn issue_token_pair(user_id: &str, config: &AuthConfig) -> Result<TokenPair, TokenError> {
    let access_token = sign(user_id, &config.access_secret, config.access_ttl_secs)?;
    let refresh_token = sign(user_id, &config.refresh_secret, config.refresh_ttl_secs)?;
    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

/// Verify an access token's signature and expiry, returning its claims.
pub fn verify_access_token(token: &str, config: &AuthConfig) -> Result<Claims, TokenError> {
    verify(token, &config.access_secret)
}

/// Verify a refresh token's signature and expiry, returning its claims.
///
/// Expired and forged tokens fail identically; callers must not surface the
/// difference.
pub fn verify_refresh_token(token: &str, config: &AuthConfig) -> Result<Claims, TokenError> {
    verify(token, &config.refresh_secret)
}
