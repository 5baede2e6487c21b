//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::models::User;
use super::tokens::verify_access_token;
use crate::common::{safe_email_log, ApiError, AppState};

/// Authenticated request extractor
///
/// Verifies the bearer access token and exposes its decoded identifier claim
/// to the handler. No database access happens here; handlers that need the
/// full user record look it up themselves.
#[derive(Debug)]
pub struct AuthedUser {
    pub identifier: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match header.and_then(|h| h.strip_prefix("Bearer ")) {
            Some(t) if !t.is_empty() => t,
            _ => {
                warn!("Authentication failed: missing or malformed Authorization header");
                return Err(ApiError::Unauthorized(
                    "Authorization token missing or malformed".to_string(),
                ));
            }
        };

        let claims = verify_access_token(token, &app_state.auth).map_err(|e| {
            warn!(error = %e, "Access token verification failed");
            ApiError::Unauthorized("Unauthorized access".to_string())
        })?;

        debug!(user_id = %claims.sub, "Request authenticated");

        Ok(AuthedUser {
            identifier: claims.sub,
        })
    }
}

/// Admin request extractor
///
/// Layers on AuthedUser: loads the user record and requires its email to be
/// in the configured admin set.
#[derive(Debug)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let authed = AuthedUser::from_request_parts(parts, state).await?;

        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&authed.identifier)
            .fetch_optional(&app_state.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        let user = match user {
            Some(u) => u,
            None => {
                warn!(user_id = %authed.identifier, "Admin check failed: user not found");
                return Err(ApiError::Unauthorized("Unauthorized access".to_string()));
            }
        };

        if !app_state.admin_emails.contains(&user.email.to_lowercase()) {
            warn!(
                user_id = %user.id,
                email = %safe_email_log(&user.email),
                "Admin access denied"
            );
            return Err(ApiError::Forbidden("Admin access required".to_string()));
        }

        Ok(AdminUser {
            id: user.id,
            email: user.email,
        })
    }
}
