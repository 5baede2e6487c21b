// Application configuration loaded once at startup

use std::collections::HashSet;
use std::env;

use anyhow::bail;
use tracing::warn;

/// Token signing configuration for the session layer.
///
/// Access and refresh tokens are signed with separate secrets so that a
/// leaked refresh-signing key cannot be used to forge access tokens (and
/// vice versa). Access-token lifetime must stay strictly shorter than
/// refresh-token lifetime for rotation to mean anything; `AppConfig::from_env`
/// enforces both constraints.
#[derive(Clone)]
pub struct AuthConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_secs: u64,
    pub refresh_ttl_secs: u64,
}

/// Full application configuration, built from the process environment in
/// `main` and injected into `AppState`. No module reads env vars after
/// startup.
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub admin_emails: HashSet<String>,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://fitness_api.db".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| {
                "http://localhost:3000,http://localhost:8081,http://localhost:19006".to_string()
            })
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let admin_emails: HashSet<String> = env::var("ADMIN_EMAILS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let access_secret = env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| {
            warn!("ACCESS_TOKEN_SECRET not set, using development default");
            "dev_access_secret_change_in_production".to_string()
        });
        let refresh_secret = env::var("REFRESH_TOKEN_SECRET").unwrap_or_else(|_| {
            warn!("REFRESH_TOKEN_SECRET not set, using development default");
            "dev_refresh_secret_change_in_production".to_string()
        });

        if access_secret == refresh_secret {
            bail!("ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET must differ");
        }

        let access_ttl_secs = env::var("ACCESS_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(300);
        let refresh_ttl_secs = env::var("REFRESH_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        if access_ttl_secs >= refresh_ttl_secs {
            bail!(
                "ACCESS_TOKEN_TTL_SECS ({}) must be shorter than REFRESH_TOKEN_TTL_SECS ({})",
                access_ttl_secs,
                refresh_ttl_secs
            );
        }

        Ok(Self {
            database_url,
            port,
            cors_origins,
            admin_emails,
            auth: AuthConfig {
                access_secret,
                refresh_secret,
                access_ttl_secs,
                refresh_ttl_secs,
            },
        })
    }
}
