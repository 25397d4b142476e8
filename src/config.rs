use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Inbox that receives contact form submissions.
    pub recipient: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub clients_config: PathBuf,
    pub public_dir: PathBuf,
    pub static_dir: PathBuf,
    pub css_themes_dir: PathBuf,
    pub smtp: SmtpSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let path_or = |key: &str, default: &str| {
            PathBuf::from(get(key).unwrap_or_else(|| default.to_string()))
        };

        let database_url =
            get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match get("SMTP_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "SMTP_PORT",
                value: raw,
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            database_url,
            bind_addr: get("BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            clients_config: path_or("CLIENTS_CONFIG", "config.json"),
            public_dir: path_or("PUBLIC_DIR", "public"),
            static_dir: path_or("STATIC_DIR", "static"),
            css_themes_dir: path_or("CSS_THEMES_DIR", "cssThemes"),
            smtp: SmtpSettings {
                host: get("SMTP_HOST")
                    .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                port,
                username: get("SMTP_EMAIL"),
                password: get("SMTP_PASSWORD"),
                recipient: get("AGENT_EMAIL"),
            },
        })
    }
}
