// Application state shared across all modules

use sqlx::SqlitePool;
use std::collections::HashSet;

use super::config::AuthConfig;

/// Application state containing the database pool and startup configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub auth: AuthConfig,
    pub admin_emails: HashSet<String>,
}
