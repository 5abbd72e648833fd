//! Environment-derived configuration.

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Port the server listens on.
    pub(crate) port: u16,
    /// MongoDB connection string.
    pub(crate) mongodb_uri: String,
    /// Name of the database holding all collections.
    pub(crate) database: String,
    /// Process-wide secret used to sign session tokens.
    pub(crate) jwt_secret: String,
    /// Lifetime of an issued session token, in seconds.
    pub(crate) token_expiry_secs: i64,
    /// Origins allowed by the CORS layer.
    pub(crate) allowed_origins: Vec<String>,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Ok(Self {
            port: env_or("PORT", "5000")
                .parse()
                .context("PORT is not a valid port number")?,
            mongodb_uri: std::env::var("MONGODB_URI").context("MONGODB_URI is not set in env")?,
            database: env_or("MONGODB_DATABASE", "assignment"),
            jwt_secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set in env")?,
            token_expiry_secs: env_or("EXPIRES_IN", "86400")
                .parse()
                .context("EXPIRES_IN is not a valid number of seconds")?,
            allowed_origins: env_or("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(|origin| origin.trim().to_owned())
                .filter(|origin| !origin.is_empty())
                .collect(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        tracing::info!("{} not set, using default: {}", key, default);
        default.to_owned()
    })
}
