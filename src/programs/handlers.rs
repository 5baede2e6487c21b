use super::models::{CreateProgramRequest, CreateProgramWorkoutRequest, MessageResponse, UpdateProgramRequest};
use super::services::ProgramsService;
use crate::auth::AdminUser;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// ============================================================================
// Public Program Handlers
// ============================================================================

/// GET /api/programs - List all workout programs
pub async fn get_programs(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let programs_service = ProgramsService::new(app_state.db.clone());

    let programs = programs_service.get_all_programs().await?;

    Ok(Json(programs))
}

/// GET /api/programs/:id - Get a program with its workout days
pub async fn get_program_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(program_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let programs_service = ProgramsService::new(app_state.db.clone());

    let detail = programs_service.get_program_detail(&program_id).await?;

    Ok(Json(detail))
}

// ============================================================================
// Admin Program Handlers
// ============================================================================

/// POST /api/admin/programs - Create a new program
pub async fn create_program(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
    Json(request): Json<CreateProgramRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let programs_service = ProgramsService::new(app_state.db.clone());

    info!(admin = %admin.email, "Program create requested");

    let program = programs_service.create_program(request).await?;

    Ok((StatusCode::CREATED, Json(program)))
}

/// PUT /api/admin/programs/:id - Update a program
pub async fn update_program(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminUser,
    Path(program_id): Path<String>,
    Json(request): Json<UpdateProgramRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let programs_service = ProgramsService::new(app_state.db.clone());

    let program = programs_service.update_program(&program_id, request).await?;

    Ok(Json(program))
}

/// DELETE /api/admin/programs/:id - Delete a program
pub async fn delete_program(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
    Path(program_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let programs_service = ProgramsService::new(app_state.db.clone());

    info!(admin = %admin.id, program_id = %program_id, "Program delete requested");

    programs_service.delete_program(&program_id).await?;

    Ok(Json(MessageResponse {
        message: "Program deleted successfully".to_string(),
    }))
}

/// POST /api/admin/programs/:id/workouts - Add a workout day to a program
pub async fn create_program_workout(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminUser,
    Path(program_id): Path<String>,
    Json(request): Json<CreateProgramWorkoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let programs_service = ProgramsService::new(app_state.db.clone());

    let workout = programs_service.create_workout(&program_id, request).await?;

    Ok((StatusCode::CREATED, Json(workout)))
}

/// DELETE /api/admin/programs/:program_id/workouts/:workout_id - Remove a workout day
pub async fn delete_program_workout(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminUser,
    Path((program_id, workout_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let programs_service = ProgramsService::new(app_state.db.clone());

    programs_service
        .delete_workout(&program_id, &workout_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Workout deleted successfully".to_string(),
    }))
}
