use super::handlers;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Creates the exercises router with public browse and admin manage routes
pub fn exercises_routes() -> Router {
    Router::new()
        // Public browse routes
        .route("/api/exercises", get(handlers::get_exercises))
        .route("/api/exercises/:id", get(handlers::get_exercise_by_id))
        // Admin manage routes
        .route("/api/admin/exercises", post(handlers::create_exercise))
        .route(
            "/api/admin/exercises/:id",
            delete(handlers::delete_exercise).put(handlers::update_exercise),
        )
}
