// src/profile/routes.rs

use axum::{routing::get, Router};

use super::handlers;

pub fn profile_routes() -> Router {
    Router::new().route(
        "/api/profile",
        get(handlers::get_profile_handler).put(handlers::upsert_profile_handler),
    )
}
