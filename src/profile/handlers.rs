// src/profile/handlers.rs

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::{Profile, UpsertProfileRequest};
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/profile - Get the authenticated user's fitness profile
pub async fn get_profile_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Profile>, ApiError> {
    let state = state_lock.read().await.clone();

    let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ?")
        .bind(&authed.identifier)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    Ok(Json(profile))
}

/// PUT /api/profile - Create or update the authenticated user's fitness profile
///
/// Fields absent from the request keep their stored values.
pub async fn upsert_profile_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<UpsertProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = request.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    info!(user_id = %authed.identifier, "Profile update request received");

    let equipment_json = request
        .equipment
        .as_ref()
        .map(|items| serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string()));

    sqlx::query(
        r#"
        INSERT INTO profiles (
            user_id, goal, experience_level, height_cm, weight_kg,
            training_days_per_week, equipment, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, datetime('now'))
        ON CONFLICT(user_id) DO UPDATE SET
            goal = COALESCE(excluded.goal, goal),
            experience_level = COALESCE(excluded.experience_level, experience_level),
            height_cm = COALESCE(excluded.height_cm, height_cm),
            weight_kg = COALESCE(excluded.weight_kg, weight_kg),
            training_days_per_week = COALESCE(excluded.training_days_per_week, training_days_per_week),
            equipment = COALESCE(excluded.equipment, equipment),
            updated_at = datetime('now')
        "#,
    )
    .bind(&authed.identifier)
    .bind(request.goal.as_deref())
    .bind(request.experience_level.as_deref())
    .bind(request.height_cm)
    .bind(request.weight_kg)
    .bind(request.training_days_per_week)
    .bind(equipment_json.as_deref())
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            user_id = %authed.identifier,
            "Database error updating profile"
        );
        ApiError::DatabaseError(e)
    })?;

    let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ?")
        .bind(&authed.identifier)
        .fetch_one(&state.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %authed.identifier,
                "Database error fetching updated profile"
            );
            ApiError::DatabaseError(e)
        })?;

    info!(user_id = %authed.identifier, "Profile updated successfully");

    Ok(Json(profile))
}
