use std::net::SocketAddr;

use thiserror::Error;

use crate::env::{env_string, parse_bool};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://civicos.db?mode=rwc";
pub const DEFAULT_MLA_EMAIL_DOMAIN: &str = "civicos.in";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Brevo transactional email credentials.
#[derive(Clone)]
pub struct BrevoConfig {
    pub api_key: String,
    pub sender_email: String,
    pub sender_name: Option<String>,
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub jwt_secret: String,
    /// Domain used for derived MLA emails (`name.constituency@<domain>`).
    pub mla_email_domain: String,
    pub frontend_url: String,
    /// `None` disables issue notification emails.
    pub brevo: Option<BrevoConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw =
            env_string(&lookup, "BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let db_max_connections = match env_string(&lookup, "DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: "DB_MAX_CONNECTIONS",
                    value: raw,
                })?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let run_migrations = match env_string(&lookup, "RUN_MIGRATIONS") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                key: "RUN_MIGRATIONS",
                value: raw,
            })?,
            None => true,
        };

        let jwt_secret = env_string(&lookup, "JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let brevo = match (
            env_string(&lookup, "BREVO_API_KEY"),
            env_string(&lookup, "BREVO_SENDER_EMAIL"),
        ) {
            (Some(api_key), Some(sender_email)) => Some(BrevoConfig {
                api_key,
                sender_email,
                sender_name: env_string(&lookup, "BREVO_SENDER_NAME"),
            }),
            _ => None,
        };

        Ok(Self {
            bind_addr,
            database_url: env_string(&lookup, "DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            db_max_connections,
            run_migrations,
            jwt_secret,
            mla_email_domain: env_string(&lookup, "MLA_EMAIL_DOMAIN")
                .map(|d| d.trim_start_matches('@').to_ascii_lowercase())
                .unwrap_or_else(|| DEFAULT_MLA_EMAIL_DOMAIN.to_string()),
            frontend_url: env_string(&lookup, "FRONTEND_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            brevo,
        })
    }
}
