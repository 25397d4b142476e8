use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum WebsiteError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode website JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LandingPageError {
    #[error("Failed to open config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Customer {0:?} not found")]
    CustomerNotFound(String),

    #[error("Customer id {0:?} can not be used as a directory name")]
    InvalidCustomerId(String),

    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to create directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to save HTML file: {0}")]
    Write(std::io::Error),
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("SMTP credentials not configured")]
    NotConfigured,

    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("Failed to send email: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
