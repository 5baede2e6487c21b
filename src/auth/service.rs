//! Session management over the user store
//!
//! Issues, verifies, and rotates token pairs, and persists the current
//! refresh token on the user row. At most one refresh token is valid per user
//! at any time: logins overwrite it, refreshes rotate it with a
//! compare-and-swap, logout clears it.

use sqlx::SqlitePool;
use tracing::{info, warn};

use super::models::{RegisterRequest, User};
use super::password::{hash_password, verify_password};
use super::tokens::{issue_token_pair, verify_refresh_token, TokenPair};
use crate::common::helpers::safe_token_log;
use crate::common::{generate_user_id, safe_email_log, ApiError, AuthConfig, Validator};

/// Returned for every credential failure on the login path. Must not reveal
/// whether the email exists or the password was wrong.
const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Returned for every refresh-token failure: expired, forged, or superseded
/// by a later rotation.
const BAD_REFRESH_TOKEN: &str = "Invalid or expired refresh token";

pub struct AuthService {
    db: SqlitePool,
    auth: AuthConfig,
}

impl AuthService {
    pub fn new(db: SqlitePool, auth: AuthConfig) -> Self {
        Self { db, auth }
    }

    /// Create a new account and start a session.
    ///
    /// The user row is written before tokens are issued, and the refresh
    /// token is persisted before the pair is returned.
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenPair, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let email = request.email.trim().to_lowercase();

        let existing: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(&email)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if existing.is_some() {
            warn!(
                email = %safe_email_log(&email),
                "Registration rejected: email already in use"
            );
            return Err(ApiError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let user_id = generate_user_id();
        let password_hash = hash_password(&request.password)?;

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, dob, password_hash)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user_id)
        .bind(&email)
        .bind(request.name.trim())
        .bind(request.dob.as_deref())
        .bind(&password_hash)
        .execute(&self.db)
        .await
        .map_err(|e| {
            // Two concurrent registrations can both pass the pre-check; the
            // UNIQUE constraint settles it.
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("An account with this email already exists".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        let pair = self.start_session(&user_id).await?;

        info!(
            user_id = %user_id,
            email = %safe_email_log(&email),
            "New account registered"
        );

        Ok(pair)
    }

    /// Verify credentials and start a session.
    ///
    /// Unknown email and wrong password return the same generic error.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        let email = email.trim().to_lowercase();

        let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(&email)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        let user = match user {
            Some(u) if verify_password(password, &u.password_hash) => u,
            _ => {
                warn!(
                    email = %safe_email_log(&email),
                    "Login failed: bad credentials"
                );
                return Err(ApiError::Unauthorized(BAD_CREDENTIALS.to_string()));
            }
        };

        let pair = self.start_session(&user.id).await?;

        info!(
            user_id = %user.id,
            email = %safe_email_log(&user.email),
            "User logged in"
        );

        Ok(pair)
    }

    /// Rotate a refresh token: verify it, confirm it is the currently
    /// persisted one, and replace it with a fresh pair.
    ///
    /// The presented token must equal the stored `refresh_token`, so a token
    /// superseded by a later rotation is rejected even before its own expiry.
    /// The overwrite is a compare-and-swap: of two racing refresh calls with
    /// the same old token, exactly one wins and the other gets 401.
    pub async fn refresh(&self, presented: &str) -> Result<TokenPair, ApiError> {
        let claims = verify_refresh_token(presented, &self.auth).map_err(|e| {
            warn!(
                error = %e,
                token = %safe_token_log(presented),
                "Refresh token verification failed"
            );
            ApiError::Unauthorized(BAD_REFRESH_TOKEN.to_string())
        })?;

        let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&claims.sub)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        let user = user.ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let pair = issue_token_pair(&user.id, &self.auth).map_err(|e| {
            warn!(error = %e, user_id = %user.id, "Token issuance failed");
            ApiError::InternalServer("Token issuance failed".to_string())
        })?;

        let result = sqlx::query(
            "UPDATE users SET refresh_token = ? WHERE id = ? AND refresh_token = ?",
        )
        .bind(&pair.refresh_token)
        .bind(&user.id)
        .bind(presented)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            warn!(
                user_id = %user.id,
                "Refresh rejected: presented token is not the current session token"
            );
            return Err(ApiError::Unauthorized(BAD_REFRESH_TOKEN.to_string()));
        }

        info!(user_id = %user.id, "Session refreshed");

        Ok(pair)
    }

    /// Load the user behind a verified access token's identifier claim.
    pub async fn current_user(&self, identifier: &str) -> Result<User, ApiError> {
        let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(identifier)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        user.ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    /// End the user's session by clearing the stored refresh token.
    pub async fn logout(&self, identifier: &str) -> Result<(), ApiError> {
        sqlx::query("UPDATE users SET refresh_token = NULL WHERE id = ?")
            .bind(identifier)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(user_id = %identifier, "User logged out");

        Ok(())
    }

    /// Issue a pair and persist its refresh token, replacing any prior
    /// session. The write completes before the pair is returned.
    async fn start_session(&self, user_id: &str) -> Result<TokenPair, ApiError> {
        let pair = issue_token_pair(user_id, &self.auth).map_err(|e| {
            warn!(error = %e, user_id = %user_id, "Token issuance failed");
            ApiError::InternalServer("Token issuance failed".to_string())
        })?;

        sqlx::query("UPDATE users SET refresh_token = ? WHERE id = ?")
            .bind(&pair.refresh_token)
            .bind(user_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(pair)
    }
}
