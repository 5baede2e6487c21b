//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Email/password registration and login
//! - Access/refresh token pair issuance, verification, and rotation
//! - AuthedUser / AdminUser extractors for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod service;
pub mod tokens;
pub mod validators;


pub use extractors::{AdminUser, AuthedUser};
pub use models::User;
pub use routes::auth_routes;
pub use service::AuthService;
