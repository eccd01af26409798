use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use rms_core::AppError;
use tracing_subscriber::EnvFilter;

/// Signing secret used when `JWT_SECRET` is not set.
///
/// Anyone who knows this value can mint valid tokens, so it is only suitable
/// for local development.
pub const DEV_JWT_SECRET: &str = "rms_dev_secret_key";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_secret_is_default: bool,
    pub api_host: String,
    pub api_port: u16,
    pub cors_allowed_origin: String,
    pub index_html_path: String,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let database_url = required_env("DATABASE_URL")?;
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .map(|value| {
                value.parse::<u32>().map_err(|error| {
                    AppError::Validation(format!("invalid DATABASE_MAX_CONNECTIONS: {error}"))
                })
            })
            .transpose()?
            .unwrap_or(5);

        let configured_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let jwt_secret_is_default = configured_secret.is_none();
        let jwt_secret = configured_secret.unwrap_or_else(|| DEV_JWT_SECRET.to_owned());

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8000);

        let cors_allowed_origin =
            env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_owned());
        let index_html_path =
            env::var("INDEX_HTML_PATH").unwrap_or_else(|_| "index.html".to_owned());

        Ok(Self {
            migrate_only,
            database_url,
            database_max_connections,
            jwt_secret,
            jwt_secret_is_default,
            api_host,
            api_port,
            cors_allowed_origin,
            index_html_path,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    let value =
        env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}
