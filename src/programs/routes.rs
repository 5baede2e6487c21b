use super::handlers;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Creates the programs router with public browse and admin manage routes
pub fn programs_routes() -> Router {
    Router::new()
        // Public browse routes
        .route("/api/programs", get(handlers::get_programs))
        .route("/api/programs/:id", get(handlers::get_program_by_id))
        // Admin manage routes
        .route("/api/admin/programs", post(handlers::create_program))
        .route(
            "/api/admin/programs/:id",
            delete(handlers::delete_program).put(handlers::update_program),
        )
        .route(
            "/api/admin/programs/:id/workouts",
            post(handlers::create_program_workout),
        )
        .route(
            "/api/admin/programs/:program_id/workouts/:workout_id",
            delete(handlers::delete_program_workout),
        )
}
