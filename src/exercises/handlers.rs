use super::models::{
    CreateExerciseRequest, ListExercisesQuery, MessageResponse, UpdateExerciseRequest,
};
use super::services::ExercisesService;
use crate::auth::AdminUser;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// ============================================================================
// Public Exercise Handlers
// ============================================================================

/// GET /api/exercises - List exercises, with optional filters
///
/// Query params: `muscle_group`, `equipment`, `q` (name search)
pub async fn get_exercises(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(filter): Query<ListExercisesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let exercises_service = ExercisesService::new(app_state.db.clone());

    let exercises = exercises_service.list_exercises(&filter).await?;

    Ok(Json(exercises))
}

/// GET /api/exercises/:id - Get exercise by ID
pub async fn get_exercise_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(exercise_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let exercises_service = ExercisesService::new(app_state.db.clone());

    let exercise = exercises_service.get_exercise_by_id(&exercise_id).await?;

    Ok(Json(exercise))
}

// ============================================================================
// Admin Exercise Handlers
// ============================================================================

/// POST /api/admin/exercises - Create a new exercise
pub async fn create_exercise(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
    Json(request): Json<CreateExerciseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let exercises_service = ExercisesService::new(app_state.db.clone());

    info!(admin = %admin.email, "Exercise create requested");

    let exercise = exercises_service.create_exercise(request).await?;

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// PUT /api/admin/exercises/:id - Update an exercise
pub async fn update_exercise(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminUser,
    Path(exercise_id): Path<String>,
    Json(request): Json<UpdateExerciseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let exercises_service = ExercisesService::new(app_state.db.clone());

    let exercise = exercises_service
        .update_exercise(&exercise_id, request)
        .await?;

    Ok(Json(exercise))
}

/// DELETE /api/admin/exercises/:id - Delete an exercise
pub async fn delete_exercise(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminUser,
    Path(exercise_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let exercises_service = ExercisesService::new(app_state.db.clone());

    exercises_service.delete_exercise(&exercise_id).await?;

    Ok(Json(MessageResponse {
        message: "Exercise deleted successfully".to_string(),
    }))
}
